pub mod sheet;

pub use sheet::render_sheet;
