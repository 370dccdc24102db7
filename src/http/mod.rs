//! Request template construction and the transport used to send it.
mod sender;
mod template;
mod transport;


pub use sender::ReqwestTransport;
pub use template::RequestTemplate;
pub use transport::Transport;
