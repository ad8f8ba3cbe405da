//! Stand-in for a database instance: accepts TCP connections on
//! 127.0.0.1:27017 (or the port given as the first argument) and closes them.
//!
//! ```text
//! cargo run --example mock_listener
//! cargo run -- --target localhost:27017
//! ```

use std::net::SocketAddr;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let port: u16 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 27017,
    };

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("Mock listener accepting on {}", addr);

    loop {
        let (socket, peer) = listener.accept().await?;
        println!("Accepted connection from {}", peer);
        drop(socket);
    }
}
