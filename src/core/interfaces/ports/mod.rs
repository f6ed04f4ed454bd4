mod http_port;

pub use http_port::{HttpPort, HttpResponse};
