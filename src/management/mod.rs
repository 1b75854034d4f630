mod genres;
mod table;

pub use genres::ArtistGenreCache;
pub use table::OutputTable;
pub use table::TableError;
pub use table::TableSink;
pub use table::render_cell;
