use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GlyphError {
    #[error("unknown outline command `{0}`")]
    UnknownCommand(String),

    #[error("outline command `{command}` is missing a coordinate")]
    MissingCoordinate { command: char },

    #[error("invalid outline number `{0}`")]
    InvalidNumber(String),

    #[error("outline segment `{0}` appears before any move-to")]
    MissingMoveTo(char),

    #[error("typeface has no glyph for {0:?}")]
    MissingGlyph(char),

    #[error("cap tessellation failed: {0}")]
    Tessellation(String),
}
