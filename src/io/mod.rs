pub mod output;

pub use output::{create_writer, JsonWriter, OutputWriter, RenderContext, TerminalWriter};
