//! Crate-level documentation rendering.

/// Joins the `//!` lines it wraps into the crate doc string.
///
/// With the `doc` feature, `svgbob` fences in those lines are drawn as inline SVG.
#[cfg(feature = "doc")]
macro_rules! crate_docs {
    ( $( #![doc = $line:literal] )* ) => {
        svgbobdoc::transform!( $( #![doc = $line] )* )
    };
}

#[cfg(not(feature = "doc"))]
macro_rules! crate_docs {
    ( $( #![doc = $line:literal] )* ) => {
        core::concat!( $( $line, '\n' ),* )
    };
}

pub(crate) use crate_docs;
