//! Library side of the `overture2osm` command: logging setup, GeoJSON file
//! I/O, and the read/convert/write pipeline the subcommands drive.

pub mod io;
pub mod logging;
pub mod pipeline;
