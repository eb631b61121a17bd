//! Argument type descriptors.
//!
//! A descriptor is the compact JVM-style signature of an argument's declared
//! type: a primitive letter (`I`, `J`, ...), an object type
//! (`Ljava/lang/String;`), or an array (`[` followed by the element
//! descriptor). Descriptors are supplied by the caller and never validated up
//! front; [`TypeDescriptor::kind`] classifies them on demand and reports
//! malformed signatures as [`DescriptorKind::Invalid`].

use std::fmt;

/// Primitive JVM types that may appear as argument descriptors.
///
/// `void` is deliberately absent: it can never be an argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl Primitive {
    /// All primitives, in descriptor-code order.
    pub const ALL: [Primitive; 8] = [
        Primitive::Boolean,
        Primitive::Byte,
        Primitive::Char,
        Primitive::Short,
        Primitive::Int,
        Primitive::Long,
        Primitive::Float,
        Primitive::Double,
    ];

    /// Decode a one-letter descriptor code.
    pub fn from_code(code: char) -> Option<Primitive> {
        match code {
            'Z' => Some(Primitive::Boolean),
            'B' => Some(Primitive::Byte),
            'C' => Some(Primitive::Char),
            'S' => Some(Primitive::Short),
            'I' => Some(Primitive::Int),
            'J' => Some(Primitive::Long),
            'F' => Some(Primitive::Float),
            'D' => Some(Primitive::Double),
            _ => None,
        }
    }

    /// The one-letter descriptor code.
    pub fn code(self) -> char {
        match self {
            Primitive::Boolean => 'Z',
            Primitive::Byte => 'B',
            Primitive::Char => 'C',
            Primitive::Short => 'S',
            Primitive::Int => 'I',
            Primitive::Long => 'J',
            Primitive::Float => 'F',
            Primitive::Double => 'D',
        }
    }

    /// Source-level keyword (`int`, `boolean`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Char => "char",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
        }
    }

    /// Internal name of the wrapper class a varargs call boxes this into.
    pub fn boxed_class(self) -> &'static str {
        match self {
            Primitive::Boolean => "java/lang/Boolean",
            Primitive::Byte => "java/lang/Byte",
            Primitive::Char => "java/lang/Character",
            Primitive::Short => "java/lang/Short",
            Primitive::Int => "java/lang/Integer",
            Primitive::Long => "java/lang/Long",
            Primitive::Float => "java/lang/Float",
            Primitive::Double => "java/lang/Double",
        }
    }
}

/// Structural classification of a descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DescriptorKind<'a> {
    /// A primitive letter code.
    Primitive(Primitive),
    /// An object type; the payload is the internal class name
    /// (`java/lang/String`).
    Object(&'a str),
    /// An array of `dimensions` levels around a non-array element type.
    Array {
        dimensions: u32,
        element: Box<DescriptorKind<'a>>,
    },
    /// Anything that is not a well-formed argument descriptor.
    Invalid,
}

impl DescriptorKind<'_> {
    /// Check if the descriptor is well formed.
    pub fn is_valid(&self) -> bool {
        !matches!(self, DescriptorKind::Invalid)
    }
}

impl fmt::Display for DescriptorKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptorKind::Primitive(p) => f.write_str(p.name()),
            DescriptorKind::Object(class) => {
                for (i, part) in class.split('/').enumerate() {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(part)?;
                }
                Ok(())
            }
            DescriptorKind::Array {
                dimensions,
                element,
            } => {
                write!(f, "{element}")?;
                for _ in 0..*dimensions {
                    f.write_str("[]")?;
                }
                Ok(())
            }
            DescriptorKind::Invalid => f.write_str("<invalid descriptor>"),
        }
    }
}

/// The declared type of one format argument, as a JVM type signature.
///
/// Equality is structural: two descriptors are equal when their signatures
/// are byte-identical.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor(String);

impl TypeDescriptor {
    /// Wrap a raw signature without validating it.
    pub fn new(signature: impl Into<String>) -> Self {
        TypeDescriptor(signature.into())
    }

    /// Descriptor for a primitive type.
    pub fn primitive(primitive: Primitive) -> Self {
        TypeDescriptor(primitive.code().to_string())
    }

    /// Descriptor for a class, given either its binary name
    /// (`java.lang.String`) or its internal name (`java/lang/String`).
    pub fn object(class: &str) -> Self {
        TypeDescriptor(format!("L{};", class.replace('.', "/")))
    }

    /// Descriptor for a one-dimensional array of `element`.
    pub fn array_of(element: &TypeDescriptor) -> Self {
        TypeDescriptor(format!("[{}", element.0))
    }

    /// The raw signature.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classify the signature.
    pub fn kind(&self) -> DescriptorKind<'_> {
        classify(&self.0)
    }
}

fn classify(signature: &str) -> DescriptorKind<'_> {
    let element = signature.trim_start_matches('[');
    let dimensions = signature.len() - element.len();
    let kind = classify_element(element);
    if dimensions == 0 || !kind.is_valid() {
        return kind;
    }
    match u32::try_from(dimensions) {
        Ok(dimensions) => DescriptorKind::Array {
            dimensions,
            element: Box::new(kind),
        },
        Err(_) => DescriptorKind::Invalid,
    }
}

fn classify_element(signature: &str) -> DescriptorKind<'_> {
    let mut chars = signature.chars();
    match (chars.next(), chars.next()) {
        (Some(code), None) => {
            Primitive::from_code(code).map_or(DescriptorKind::Invalid, DescriptorKind::Primitive)
        }
        (Some('L'), Some(_)) => match signature[1..].strip_suffix(';') {
            Some(class) if is_class_name(class) => DescriptorKind::Object(class),
            _ => DescriptorKind::Invalid,
        },
        _ => DescriptorKind::Invalid,
    }
}

fn is_class_name(class: &str) -> bool {
    !class.is_empty()
        && class
            .split('/')
            .all(|part| !part.is_empty() && !part.contains([';', '[', '.']))
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeDescriptor({})", self.0)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            DescriptorKind::Invalid => write!(f, "<invalid descriptor `{}`>", self.0),
            kind => write!(f, "{kind}"),
        }
    }
}

impl From<&str> for TypeDescriptor {
    fn from(signature: &str) -> Self {
        TypeDescriptor::new(signature)
    }
}

impl From<String> for TypeDescriptor {
    fn from(signature: String) -> Self {
        TypeDescriptor(signature)
    }
}
