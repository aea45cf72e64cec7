pub mod datasets;
pub mod mock_epak;

pub use mock_epak::MockEpak;
