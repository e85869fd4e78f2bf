//! Composite values with named numeric components.

use std::fmt::{self, Display};

macro_rules! define_float_vector {
    ($(#[$meta:meta])* $name:ident { $($field:ident),+ } [$arity:literal]) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            $(pub $field: f32,)+
        }

        impl $name {
            pub const fn new($($field: f32),+) -> Self {
                Self { $($field),+ }
            }

            pub const fn to_array(self) -> [f32; $arity] {
                [$(self.$field),+]
            }
        }

        impl From<[f32; $arity]> for $name {
            fn from([$($field),+]: [f32; $arity]) -> Self {
                Self { $($field),+ }
            }
        }

        impl From<$name> for [f32; $arity] {
            fn from(value: $name) -> Self {
                value.to_array()
            }
        }
    };
}

define_float_vector!(
    /// Two-component vector.
    Vector2 { x, y } [2]
);
define_float_vector!(
    /// Three-component vector.
    Vector3 { x, y, z } [3]
);
define_float_vector!(
    /// Four-component vector.
    Vector4 { x, y, z, w } [4]
);
define_float_vector!(
    /// RGBA color with float channels, nominally in `0.0..=1.0`.
    Color { r, g, b, a } [4]
);

/// RGBA color with one byte per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color32 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color32 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Color32 {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color32> for [u8; 4] {
    fn from(value: Color32) -> Self {
        value.to_array()
    }
}

impl Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

impl Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

impl Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.2}, {:.2}, {:.2}, {:.2})",
            self.x, self.y, self.z, self.w
        )
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RGBA({:.3}, {:.3}, {:.3}, {:.3})",
            self.r, self.g, self.b, self.a
        )
    }
}

impl Display for Color32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGBA({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
