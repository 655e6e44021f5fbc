//! Line-based UCI subset.
//!
//! Each input line is one command. Commands are turned into reply lines by
//! [`UciSession::execute`]; only [`UciSession::handle_line`] touches the
//! output, so protocol errors and I/O errors never mix. A rejected command is
//! reported as `info string error: ...` and the session keeps going.

use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::agent::{Evaluator, MaterialEvaluator};
use crate::error::{UciError, UciResult};
use crate::orchestrator::Orchestrator;

pub const ENGINE_NAME: &str = "mailbox_chess";
pub const ENGINE_AUTHOR: &str = "mailbox_chess developers";

/// Whether the loop should keep reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct UciSession<W: Write, E: Evaluator = MaterialEvaluator> {
    orchestrator: Orchestrator<E>,
    out: W,
}

impl<W: Write, E: Evaluator> UciSession<W, E> {
    pub fn new(orchestrator: Orchestrator<E>, out: W) -> Self {
        Self { orchestrator, out }
    }

    pub fn orchestrator(&self) -> &Orchestrator<E> {
        &self.orchestrator
    }

    /// Consumes the session, returning the writer it replied to
    pub fn into_output(self) -> W {
        self.out
    }

    /// Reads commands until `quit` or end of input
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        for line in input.lines() {
            if self.handle_line(&line?)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    pub fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = tokens.split_first() else {
            return Ok(Flow::Continue);
        };
        debug!("received: {}", line.trim());

        let flow = match self.execute(command, args) {
            Ok((reply, flow)) => {
                for reply_line in reply {
                    writeln!(self.out, "{}", reply_line)?;
                }
                flow
            }
            Err(e) => {
                warn!("command '{}' rejected: {}", line.trim(), e);
                writeln!(self.out, "info string error: {}", e)?;
                Flow::Continue
            }
        };
        self.out.flush()?;
        Ok(flow)
    }

    /// Runs one command and returns the lines it answers with
    pub fn execute(&mut self, command: &str, args: &[&str]) -> UciResult<(Vec<String>, Flow)> {
        let reply = match command {
            "uci" => vec![
                format!("id name {}", ENGINE_NAME),
                format!("id author {}", ENGINE_AUTHOR),
                "uciok".to_string(),
            ],
            "isready" => vec!["readyok".to_string()],
            "ucinewgame" => {
                self.orchestrator.reset();
                Vec::new()
            }
            "position" => {
                self.position(args)?;
                Vec::new()
            }
            "go" => self.go(args)?,
            "perft" => {
                let depth = parse_number(args.first().copied(), "perft depth")?;
                (1..=depth)
                    .map(|d| format!("depth {}: {}", d, self.orchestrator.perft(d)))
                    .collect()
            }
            "divide" => {
                let depth = parse_number(args.first().copied(), "divide depth")?;
                let counts = self.orchestrator.divide(depth);
                let total: u64 = counts.iter().map(|(_, n)| n).sum();
                let mut reply: Vec<String> =
                    counts.iter().map(|(mv, n)| format!("{}: {}", mv, n)).collect();
                reply.push(format!("total: {}", total));
                reply
            }
            "d" => vec![self.orchestrator.position().to_fen()],
            "eval" => vec![format!("Evaluation: {}", self.orchestrator.evaluate())],
            "quit" => return Ok((Vec::new(), Flow::Quit)),
            other => return Err(UciError::UnknownCommand(other.to_string())),
        };
        Ok((reply, Flow::Continue))
    }

    /// `position startpos|fen <6 fields> [moves m1 m2 ...]`
    fn position(&mut self, args: &[&str]) -> UciResult<()> {
        let moves_at = args.iter().position(|&a| a == "moves").unwrap_or(args.len());
        let (setup, moves) = args.split_at(moves_at);
        let moves = moves.get(1..).unwrap_or_default();

        match setup.split_first() {
            Some((&"startpos", [])) => self.orchestrator.set_position(None, moves),
            Some((&"fen", fields)) if !fields.is_empty() => {
                let fen = fields.join(" ");
                self.orchestrator.set_position(Some(&fen), moves)
            }
            _ => Err(UciError::MissingArgument("startpos or fen <position>")),
        }
    }

    /// `go [depth N]`; other search limits are ignored
    fn go(&mut self, args: &[&str]) -> UciResult<Vec<String>> {
        let depth = match args.iter().position(|&a| a == "depth") {
            Some(i) => Some(parse_number(args.get(i + 1).copied(), "go depth")?),
            None => None,
        };

        let result = self.orchestrator.search(depth);
        let best = result
            .best_move
            .map_or_else(|| "0000".to_string(), |mv| mv.to_string());

        Ok(vec![
            format!(
                "info depth {} score cp {} nodes {}",
                result.depth, result.score, result.nodes_searched
            ),
            format!("bestmove {}", best),
        ])
    }
}

fn parse_number(arg: Option<&str>, what: &'static str) -> UciResult<u32> {
    let arg = arg.ok_or(UciError::MissingArgument(what))?;
    arg.parse().map_err(|_| UciError::InvalidNumber(arg.to_string()))
}
