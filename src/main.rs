use std::io;
use std::net::{TcpListener, TcpStream};

use rusty_maze::observer::ConsoleObserver;
use rusty_maze::session::MazeSession;
use rusty_maze::{SessionStreamHandler, ADDRESS, COLS, ROWS};

fn handle_client(stream: TcpStream) -> io::Result<()> {
    let session = MazeSession::new(ROWS, COLS);
    // Un instantané ASCII tous les 25 pas d'algorithme.
    let observer = ConsoleObserver::new(25);
    let mut handler = SessionStreamHandler::new(stream, session, Box::new(observer));
    handler.handle()
}

fn main() -> io::Result<()> {
    env_logger::init();

    let listener = TcpListener::bind(ADDRESS)?;
    println!("Maze session server on {}", ADDRESS);

    // Les connexions sont servies en série : une session à la fois.
    for stream in listener.incoming() {
        let stream = stream?;
        println!("New connection: {}", stream.peer_addr()?);
        if let Err(e) = handle_client(stream) {
            println!("Session terminée: {}", e);
        }
    }
    Ok(())
}
