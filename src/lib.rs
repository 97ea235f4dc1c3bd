use std::io::{self, Read, Write};

use log::debug;
use serde_json::json;

pub mod ascii;
pub mod events;
pub mod generator;
pub mod grid;
pub mod observer;
pub mod random;
pub mod session;
pub mod solver;
pub mod wire;

use events::parse_event;
use observer::RenderObserver;
use session::{MazeSession, SessionState};

pub const ADDRESS: &str = "localhost:8778";

/// Dimensions de la grille d'une session interactive. Impaires, pour
/// que le réseau des passages (cases paires) atteigne les deux bords.
pub const ROWS: usize = 21;
pub const COLS: usize = 21;

// -----------------------------------------------------------------------------
// SessionStreamHandler
// -----------------------------------------------------------------------------

/// Pilote une session de labyrinthe au-dessus d'un flux : reçoit les
/// événements JSON (sélections, commandes), les passe à la session, et
/// renvoie l'état courant ou le résultat de résolution. Générique sur
/// le flux pour être testable sans socket ; en production c'est un
/// `TcpStream`.
pub struct SessionStreamHandler<S: Read + Write> {
    stream: S,
    pub session: MazeSession,
    observer: Box<dyn RenderObserver>,
}

impl<S: Read + Write> SessionStreamHandler<S> {
    pub fn new(stream: S, session: MazeSession, observer: Box<dyn RenderObserver>) -> Self {
        Self {
            stream,
            session,
            observer,
        }
    }

    /// Boucle principale : un message reçu, un événement traité, une
    /// réponse envoyée. Se termine par l'erreur d'E/S de la déconnexion.
    pub fn handle(&mut self) -> io::Result<()> {
        loop {
            let parsed_msg = wire::receive_json(&mut self.stream)?;

            let Some(event) = parse_event(&parsed_msg) else {
                debug!("message ignoré: {}", parsed_msg);
                continue;
            };

            let before = self.session.state();
            self.session.handle_event(event, self.observer.as_mut());
            let after = self.session.state();

            if after == SessionState::Solved && before != SessionState::Solved {
                // Notification finale : le chemin complet, ou NotFound.
                let Some(outcome) = self.session.outcome() else {
                    unreachable!("état Solved sans résultat de résolution");
                };
                wire::send_json(&mut self.stream, &events::outcome_to_json(outcome))?;
            } else {
                let response = json!({ "State": format!("{:?}", after) });
                wire::send_json(&mut self.stream, &response)?;
            }
        }
    }
}

// -----------------------------------------------------------------------------
// TEST
// -----------------------------------------------------------------------------
#[test]
fn test_session_complete_sur_flux() {
    use observer::SilentObserver;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use random::RngSource;
    use std::io::Cursor;

    // Flux en mémoire : lit des messages préparés, capture les réponses.
    struct MemoryStream {
        input: Cursor<Vec<u8>>,
        output: Vec<u8>,
    }

    impl Read for MemoryStream {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.input.read(buf)
        }
    }

    impl Write for MemoryStream {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.output.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let mut input = Vec::new();
    for msg in [
        json!({"Select": {"row": 0, "col": 0, "role": "Start"}}),
        json!({"Select": {"row": 20, "col": 20, "role": "End"}}),
        json!({"Command": "Generate"}),
        json!({"Command": "Solve"}),
    ] {
        wire::send_json(&mut input, &msg).unwrap();
    }

    let stream = MemoryStream {
        input: Cursor::new(input),
        output: Vec::new(),
    };
    let session = MazeSession::with_random(
        ROWS,
        COLS,
        Box::new(RngSource::new(StdRng::seed_from_u64(21))),
    );
    let mut handler = SessionStreamHandler::new(stream, session, Box::new(SilentObserver));

    // La fin de l'entrée clôt la boucle par une erreur d'E/S.
    let err = handler.handle().unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    assert_eq!(handler.session.state(), SessionState::Solved);

    // Les réponses : trois états puis la notification de chemin.
    let mut cursor = Cursor::new(handler.stream.output);
    assert_eq!(
        wire::receive_json(&mut cursor).unwrap(),
        json!({"State": "EmptySelection"})
    );
    assert_eq!(
        wire::receive_json(&mut cursor).unwrap(),
        json!({"State": "Ready"})
    );
    assert_eq!(
        wire::receive_json(&mut cursor).unwrap(),
        json!({"State": "Generated"})
    );
    let final_msg = wire::receive_json(&mut cursor).unwrap();
    let path = final_msg
        .get("PathResult")
        .and_then(|r| r.get("Found"))
        .and_then(|p| p.as_array())
        .expect("notification de chemin attendue");
    assert_eq!(path.first().unwrap(), &json!([0, 0]));
    assert_eq!(path.last().unwrap(), &json!([20, 20]));
}
