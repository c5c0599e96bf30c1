//! Demo drivers exercising each utility module in turn.
//!
//! The echo server/client pair speaks raw TCP with no framing: each side
//! treats whatever chunk arrives as one message, which holds for the small
//! local exchanges done here but is not guaranteed by the transport.

use bytes::BytesMut;
use std::thread;
use std::time::Duration;
use tracing::warn;

use utilikit::net::{self, NetError, TcpConnection};
use utilikit::printer::print_message;
use utilikit::{files, text};

/// Receive buffer size for the echo pair.
const BUFFER_SIZE: usize = 1024;

/// Messages the demo client sends, ending with the quit sentinel.
const TEST_MESSAGES: [&str; 4] = [
    "Hello from client!",
    "This is a TCP client test",
    "Testing message exchange",
    "quit",
];

/// Run the sequential module showcase.
pub fn run_demo() {
    print_message("utilikit - Code Modularization and File Organization Example");
    print_message("=======================================\n");

    demonstrate_printing();
    demonstrate_text_processing();
    demonstrate_file_operations();

    print_message("\nAll module demos completed!");
}

fn demonstrate_printing() {
    print_message("=== Printing Module Demo ===");
    print_message("This is a simple message");
}

fn demonstrate_text_processing() {
    print_message("\n=== Text Processing Module Demo ===");

    let test_text = "Hello World Example";
    print_message(&format!("Original text: {test_text}"));
    print_message(&format!(
        "Convert to uppercase: {}",
        text::to_upper_case(test_text)
    ));
    print_message(&format!(
        "Convert to lowercase: {}",
        text::to_lower_case(test_text)
    ));

    print_message("\nSplit text (by space):");
    for word in text::split(test_text, " ") {
        print_message(&format!(" - {word}"));
    }

    print_message("\nReplace 'World' with 'C++':");
    print_message(&text::replace(test_text, "World", "C++"));

    let long_text =
        "This is a test. This test is to demonstrate word frequency. Is this working?";
    print_message("\nWord frequency count:");
    print_message(&format!("Text: {long_text}"));
    for (word, count) in text::word_frequency(long_text) {
        print_message(&format!(" - '{word}': {count} times"));
    }
}

fn demonstrate_file_operations() {
    print_message("\n=== File Operations Module Demo ===");

    let test_file_path = "test_file.txt";
    let content = "This is a test file.\nUsed to demonstrate file operation functionality.\nContains multiple lines of text.";

    print_message(&format!("Creating test file: {test_file_path}"));
    if !files::write_file(test_file_path, content) {
        print_message("Failed to create file!");
        return;
    }
    print_message("File created successfully!");

    print_message("\nReading file content:");
    print_message(&files::read_file(test_file_path));

    print_message("\nCurrent directory file list:");
    for name in files::list_files(".") {
        print_message(&format!(" - {name}"));
    }
}

/// Run the echo server: accept one client, greet it, echo its messages.
///
/// The loop ends on orderly client disconnect or a receive error.
pub fn run_server(port: u16) -> Result<(), NetError> {
    print_message("TCP Server Example");
    print_message("==================\n");

    net::init()?;

    let mut server = TcpConnection::new();
    server.start_server_default(port)?;
    print_message(&format!("Server started on port {port}"));
    print_message("Waiting for client connections...");

    let mut peer = server.accept_connection()?;
    peer.set_data_callback(|data| {
        print_message(&format!("Server received: {}", String::from_utf8_lossy(data)));
    });

    if peer.send_data(b"Welcome to the TCP server example!").is_err() {
        print_message("Failed to send welcome message");
    }

    loop {
        let chunk = match peer.receive_data(BUFFER_SIZE) {
            Ok(chunk) if chunk.is_empty() => break, // orderly close
            Ok(chunk) => chunk,
            Err(e) => {
                warn!(error = %e, "Stopping on receive failure");
                break;
            }
        };

        let mut response = BytesMut::from(&b"Echo: "[..]);
        response.extend_from_slice(&chunk);
        if peer.send_data(&response).is_err() {
            break;
        }
    }

    print_message("Server shutting down");
    peer.close_connection();
    server.close_connection();
    Ok(())
}

/// Run the echo client: receive the greeting, then send the fixed message
/// sequence, reading one response per send with a short pause in between.
pub fn run_client(host: &str, port: u16) -> Result<(), NetError> {
    print_message("TCP Client Example");
    print_message("==================\n");

    net::init()?;

    let mut client = TcpConnection::new();
    print_message(&format!("Connecting to server {host}:{port}..."));
    client.connect_to_server(host, port)?;
    client.set_data_callback(|data| {
        print_message(&format!("Client received: {}", String::from_utf8_lossy(data)));
    });

    let greeting = client.receive_data(BUFFER_SIZE)?;
    if greeting.is_empty() {
        print_message("Server closed before sending a greeting");
        client.close_connection();
        return Ok(());
    }

    for message in TEST_MESSAGES {
        print_message(&format!("Sending: {message}"));
        if client.send_data(message.as_bytes()).is_err() {
            print_message("Failed to send message");
            break;
        }

        match client.receive_data(BUFFER_SIZE) {
            Ok(reply) if reply.is_empty() => {
                print_message("Connection closed by server");
                break;
            }
            Ok(_) => {}
            Err(_) => break,
        }

        thread::sleep(Duration::from_secs(1));
    }

    print_message("Client shutting down");
    client.close_connection();
    Ok(())
}
