mod console_host_surface;
mod document_file_sink;
mod reqwest_http_client;

pub use console_host_surface::ConsoleHostSurface;
pub use document_file_sink::DocumentFileSink;
pub use reqwest_http_client::ReqwestHttpClient;
