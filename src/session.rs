use std::io::{self, BufRead, Write};
use log::debug;
use crate::board::{Board, PieceType, Position};
use crate::error::CommandError;

/// Parsed front-end input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Tap(Position),
    Promote(PieceType),
    Targets(Position),
    Show,
    Json,
    NewGame,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(head) = tokens.next() else { return Err(CommandError::Missing("command")) };
        match head {
            "tap" => {
                let first = tokens.next().ok_or(CommandError::Missing("tap"))?;
                match tokens.next() {
                    Some(col) => Ok(Command::Tap(Position::new(parse_index(first)?, parse_index(col)?)?)),
                    None => Ok(Command::Tap(Position::from_name(first)?)),
                }
            }
            "promote" => {
                let arg = tokens.next().ok_or(CommandError::Missing("promote"))?;
                let letter = arg.chars().next().ok_or(CommandError::Missing("promote"))?;
                Ok(Command::Promote(PieceType::from_letter(letter)?))
            }
            "targets" => {
                let arg = tokens.next().ok_or(CommandError::Missing("targets"))?;
                Ok(Command::Targets(Position::from_name(arg)?))
            }
            "show" => Ok(Command::Show),
            "json" => Ok(Command::Json),
            "new" => Ok(Command::NewGame),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Position::from_name(other)
                .map(Command::Tap)
                .map_err(|_| CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_index(s: &str) -> Result<u8, CommandError> {
    s.parse::<u8>().map_err(|_| CommandError::Number(s.to_string()))
}

/// Line-oriented text front-end: forwards taps to the board and reports
/// the flags it raises.
pub struct Session {
    board: Board,
    initial: Board,
    json: bool,
}

impl Session {
    pub fn new(board: Board) -> Self { Self { initial: board.clone(), board, json: false } }

    /// Print the JSON snapshot after every command.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn board(&self) -> &Board { &self.board }

    pub fn run_loop<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.board)?;
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') { continue; }
            if !self.handle_line(line, out)? { break; }
        }
        out.flush()
    }

    /// Returns `false` once the session should end.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let cmd = match Command::parse(line) {
            Ok(cmd) => cmd,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                return Ok(true);
            }
        };
        debug!("command {:?}", cmd);
        match cmd {
            Command::Tap(pos) => self.cmd_tap(pos, out)?,
            Command::Promote(kind) => {
                if self.board.is_piece_promoted() {
                    self.board.promote(kind);
                    writeln!(out, "{}", self.board)?;
                } else {
                    writeln!(out, "no promotion pending")?;
                }
            }
            Command::Targets(pos) => {
                let names: Vec<String> = self.board.legal_destinations(pos).into_iter().map(|p| p.name()).collect();
                writeln!(out, "targets {}: {}", pos.name(), if names.is_empty() { "-".to_string() } else { names.join(" ") })?;
            }
            Command::Show => writeln!(out, "{}", self.board)?,
            Command::Json => self.write_json(out)?,
            Command::NewGame => {
                self.board = self.initial.clone();
                writeln!(out, "{}", self.board)?;
            }
            Command::Help => {
                writeln!(out, "commands: <square> | tap <square> | tap <row> <col> | promote <q|r|b|n|k|p> | targets <square> | show | json | new | quit")?;
            }
            Command::Quit => return Ok(false),
        }
        if self.json && !matches!(cmd, Command::Json) {
            self.write_json(out)?;
        }
        Ok(true)
    }

    fn cmd_tap<W: Write>(&mut self, pos: Position, out: &mut W) -> io::Result<()> {
        let turn = self.board.current_turn();
        self.board.select_piece(pos);
        if self.board.current_turn() != turn {
            writeln!(out, "{}", self.board)?;
            if let Some(at) = self.board.pending_promotion() {
                writeln!(out, "promotion pending at {}: promote <q|r|b|n|k|p>", at.name())?;
            }
            if let Some(winner) = self.board.winner() {
                writeln!(out, "{} wins: {} king captured", winner, winner.opponent())?;
            }
            writeln!(out, "{} to move", self.board.current_turn())?;
        } else {
            match self.board.selected() {
                Some(sel) => writeln!(out, "selected {}", sel.name())?,
                None => writeln!(out, "nothing selected")?,
            }
        }
        Ok(())
    }

    fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer(&mut *out, &self.board.snapshot()).map_err(io::Error::from)?;
        writeln!(out)
    }
}

impl Default for Session {
    fn default() -> Self { Self::new(Board::new()) }
}
