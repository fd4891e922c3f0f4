/// Declares a fixed-shape wire record.
///
/// Fields are decoded and encoded strictly in declaration order, so the two
/// directions cannot drift apart.
macro_rules! wire_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        impl $crate::traits::StageDecode for $name {
            fn decode(
                reader: &mut $crate::cursor::ByteReader,
            ) -> $crate::errors::StageResult<Self> {
                Ok(Self {
                    $( $field: reader.read()?, )*
                })
            }
        }

        impl $crate::traits::StageEncode for $name {
            fn encode(
                &self,
                writer: &mut $crate::cursor::ByteWriter,
            ) -> $crate::errors::StageResult<()> {
                $( writer.write(&self.$field)?; )*
                Ok(())
            }
        }
    };
}

/// Declares a closed family of detail payloads keyed by a discriminant byte.
///
/// The discriminant is derived from the variant on encode, never stored, so
/// a payload and its tag cannot disagree.
macro_rules! tagged_details {
    (
        $(#[$meta:meta])*
        pub enum $name:ident in $family:literal {
            $(
                $(#[$variant_meta:meta])*
                $disc:literal => $variant:ident($payload:ty)
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant($payload),
            )*
        }

        impl $name {
            /// Every discriminant value this family accepts, in table order.
            pub const DISCRIMINANTS: &'static [u8] = &[$($disc),*];

            pub fn discriminant(&self) -> u8 {
                match self {
                    $( Self::$variant(_) => $disc, )*
                }
            }

            /// Decode the payload selected by `discriminant`, which was read
            /// at `offset`.
            pub fn decode_payload(
                discriminant: u8,
                offset: usize,
                reader: &mut $crate::cursor::ByteReader,
            ) -> $crate::errors::StageResult<Self> {
                match discriminant {
                    $( $disc => Ok(Self::$variant(reader.read()?)), )*
                    other => Err($crate::errors::StageError::UnknownVariant {
                        family: $family,
                        discriminant: other,
                        offset,
                    }),
                }
            }

            pub fn encode_payload(
                &self,
                writer: &mut $crate::cursor::ByteWriter,
            ) -> $crate::errors::StageResult<()> {
                match self {
                    $( Self::$variant(details) => writer.write(details), )*
                }
            }
        }
    };
}
