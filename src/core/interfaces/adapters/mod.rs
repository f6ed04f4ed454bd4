mod gif_provider;
mod host_surface;
mod insertion_sink;

pub use gif_provider::GifProvider;
pub use host_surface::HostSurface;
pub use insertion_sink::InsertionSink;
