//! Line-oriented game loop: prints the rack, reads column choices one line at
//! a time and offers a rematch when a game ends.

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;

use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{GameOutcome, GameState};

pub const WELCOME: &str = "\
           ***** WELCOME TO CONNECT 4 *****

    A game for two human players. Choose who is player 1 (red counter) and
    who is player 2 (yellow counter). Take it in turns to place counters
    in the rack by selecting a column number to put your counter in.

    The first player to create a line of 4 of their counters wins. Winning
    lines can be vertical, horizontal or diagonal.
";

const COLUMN_FULL: &str = "Sorry, there's no more space in that column, please select another...";
const OUT_OF_RANGE: &str = "Sorry, that column doesn't exist, please select one that does...";
const PLAY_AGAIN: &str = "Would you like to play again? ('y' for yes, anything else for no)";

pub struct Console<R, W> {
    input: R,
    output: W,
    state: GameState,
    config: AppConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: AppConfig) -> Self {
        Console {
            input,
            output,
            state: GameState::new(config.game.first_player),
            config,
        }
    }

    /// Play games until the players decline a rematch or input runs out
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{WELCOME}")?;

        loop {
            if !self.play_game()? {
                log::debug!("input closed mid-game");
                return Ok(());
            }
            if !self.play_again()? {
                return Ok(());
            }
            self.state.restart();
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Give back the writer, e.g. to inspect what was printed
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run turns until the game ends. Returns `false` if input ran out first.
    fn play_game(&mut self) -> io::Result<bool> {
        while !self.state.is_terminal() {
            self.draw()?;

            let player = self.state.current_player();
            writeln!(
                self.output,
                "Player {}, please choose a column in which to place your piece",
                player.id()
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(false);
            };

            match self.state.apply_input(&line) {
                Ok(()) => {}
                Err(MoveError::ColumnFull) => self.complain(COLUMN_FULL)?,
                Err(MoveError::OutOfRange) => self.complain(OUT_OF_RANGE)?,
                Err(MoveError::GameOver) => break,
            }
        }

        self.draw()?;
        match self.state.outcome() {
            Some(GameOutcome::Winner(player)) => writeln!(
                self.output,
                "Congratulations Player {}, you've won!!",
                player.id()
            )?,
            Some(GameOutcome::Draw) => writeln!(self.output, "The rack is full, it's a draw!")?,
            None => {}
        }

        Ok(true)
    }

    fn play_again(&mut self) -> io::Result<bool> {
        writeln!(self.output, "{PLAY_AGAIN}")?;
        self.output.flush()?;

        Ok(self
            .read_line()?
            .is_some_and(|answer| self.config.game.wants_replay(&answer)))
    }

    fn draw(&mut self) -> io::Result<()> {
        let rack = self.state.board().draw_with(&self.config.display);
        write!(self.output, "{rack}")
    }

    fn complain(&mut self, message: &str) -> io::Result<()> {
        if self.config.display.color {
            writeln!(self.output, "{}", message.red())?;
        } else {
            writeln!(self.output, "{message}")?;
        }
        writeln!(self.output)
    }

    /// Read one line. Bytes that are not UTF-8 are replaced rather than
    /// rejected, so a garbled line is just an unusable column.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;
    use std::io::Cursor;

    fn plain_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.display.color = false;
        config
    }

    fn play(input: &str, config: AppConfig) -> (String, GameState) {
        let mut console = Console::new(Cursor::new(input.to_string()), Vec::new(), config);
        console.run().unwrap();
        let state = console.state().clone();
        let output = String::from_utf8(console.into_output()).unwrap();
        (output, state)
    }

    #[test]
    fn test_vertical_win_then_decline() {
        let (output, state) = play("1\n2\n1\n2\n1\n2\n1\nn\n", plain_config());

        assert!(output.starts_with(WELCOME));
        assert!(output.contains("Player 1, please choose a column"));
        assert!(output.contains("Player 2, please choose a column"));
        assert!(output.contains("Congratulations Player 1, you've won!!"));
        assert!(output.trim_end().ends_with(PLAY_AGAIN));
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
    }

    #[test]
    fn test_refused_moves_reprompt_same_player() {
        let input = "9\nabc\n1\n1\n1\n1\n1\n1\n1\n";
        let (output, state) = play(input, plain_config());

        assert_eq!(output.matches(OUT_OF_RANGE).count(), 2);
        assert_eq!(output.matches(COLUMN_FULL).count(), 1);
        // Two refusals, then Red takes the bottom of column 1
        assert_eq!(state.board().owner(1, 6), Some(Player::Red));
        assert_eq!(output.matches("Player 1, please choose").count(), 7);
        assert_eq!(state.current_player(), Player::Red);
    }

    #[test]
    fn test_end_of_input_mid_game() {
        let (output, state) = play("4\n", plain_config());
        assert!(!state.is_terminal());
        assert_eq!(state.board().owner(4, 6), Some(Player::Red));
        assert!(!output.contains("Congratulations"));
        assert!(!output.contains(PLAY_AGAIN));
    }

    #[test]
    fn test_replay_starts_fresh_game() {
        let first = "1\n2\n1\n2\n1\n2\n1\n";
        let second = "7\n6\n7\n6\n7\n6\n7\n";
        let input = format!("{first}yes\n{second}no\n");
        let (output, state) = play(&input, plain_config());

        assert_eq!(output.matches(WELCOME).count(), 1);
        assert_eq!(output.matches("Congratulations Player 1").count(), 2);
        assert_eq!(output.matches(PLAY_AGAIN).count(), 2);
        // Only the second game's pieces remain
        assert_eq!(state.board().owner(1, 6), None);
        assert_eq!(state.board().owner(7, 3), Some(Player::Red));
    }

    #[test]
    fn test_replay_answer_from_config() {
        let mut config = plain_config();
        config.game.replay_answers = vec!["again".into()];
        let input = "1\n2\n1\n2\n1\n2\n1\ny\n";
        let (output, _) = play(input, config);
        assert_eq!(output.matches(PLAY_AGAIN).count(), 1);
        assert_eq!(output.matches("Player 1, please choose").count(), 4);
    }

    #[test]
    fn test_yellow_first_from_config() {
        let mut config = plain_config();
        config.game.first_player = Player::Yellow;
        let (output, state) = play("3\n", config);
        let yellow = output.find("Player 2, please choose a column").unwrap();
        let red = output.find("Player 1, please choose a column").unwrap();
        assert!(yellow < red);
        assert_eq!(state.board().owner(3, 6), Some(Player::Yellow));
    }

    #[test]
    fn test_draw_is_announced() {
        let moves = [
            6, 5, 6, 1, 7, 3, 5, 6, 6, 1, 5, 2, 2, 1, 5, 6, 7, 6, 4, 2, 2, 3, 3, 7, 3, 7, 7, 4,
            7, 3, 1, 4, 1, 4, 4, 5, 4, 2, 5, 3, 2, 1,
        ];
        let mut input: String = moves.iter().map(|m| format!("{m}\n")).collect();
        input.push_str("n\n");

        let (output, state) = play(&input, plain_config());
        assert!(output.contains("The rack is full, it's a draw!"));
        assert!(!output.contains("Congratulations"));
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_invalid_utf8_line_is_out_of_range() {
        let input = vec![0xff, 0xfe, b'\n', b'1', b'\n'];
        let mut console = Console::new(Cursor::new(input), Vec::new(), plain_config());
        console.run().unwrap();

        let state = console.state().clone();
        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output.matches(OUT_OF_RANGE).count(), 1);
        // Red is asked again and then takes column 1
        assert_eq!(output.matches("Player 1, please choose").count(), 2);
        assert_eq!(state.board().owner(1, 6), Some(Player::Red));
        assert_eq!(state.current_player(), Player::Yellow);
    }

    #[test]
    fn test_board_is_drawn_each_turn() {
        let (output, _) = play("4\n", plain_config());
        // Once before each of the two prompts
        assert_eq!(output.matches("   1  2  3  4  5  6  7 ").count(), 2);
        assert!(output.contains("  |  |  |  |\u{278A} |  |  |  |"));
    }
}
