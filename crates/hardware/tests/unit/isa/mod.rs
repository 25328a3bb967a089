/// Decoder properties over generated words.
pub mod decode_properties;

/// Rendered assembly text.
pub mod disasm;
