//! utilikit: a collection of small, independent utility modules.
//!
//! Modules:
//! - `printer`: single-line console output
//! - `text`: pure string transforms (case, split, replace, word frequency)
//! - `files`: whole-file read/write, existence checks, directory listing
//! - `net`: a minimal blocking TCP client/server wrapper
//!
//! Each module stands alone; the demo binary exercises them in turn.

pub mod files;
pub mod net;
pub mod printer;
pub mod text;
