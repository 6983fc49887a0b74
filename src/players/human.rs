use crate::Arbitrary;
use crate::game::Agent;
use crate::game::Move;
use crate::game::Quitter;
use dialoguer::Input;

/// The person at the keyboard.
///
/// Prompts block until the answer parses. If the terminal itself fails the
/// human is treated as absent: a random move, and no abandonment.
#[derive(Debug, Default)]
pub struct Human;

impl Agent for Human {
    fn choose(&mut self, round: usize) -> Move {
        Input::<String>::new()
            .with_prompt(format!("Round {}. Choose your move (rock, paper, scissors)", round))
            .validate_with(|input: &String| -> Result<(), String> {
                Move::try_from(input.as_str())
                    .map(|_| ())
                    .map_err(|_| format!("Incorrect move: {}. Try again.", input.trim()))
            })
            .interact_text()
            .map_err(|e| log::error!("reading move for round {}: {}", round, e))
            .ok()
            .and_then(|input| Move::try_from(input.as_str()).ok())
            .unwrap_or_else(Move::random)
    }
}

impl Quitter for Human {
    fn abandon(&mut self, round: usize) -> bool {
        Input::<String>::new()
            .with_prompt("Do you want to give up the round? (yes/no)")
            .validate_with(|input: &String| -> Result<(), String> {
                Self::decision(input)
                    .map(|_| ())
                    .ok_or_else(|| format!("Invalid answer: {}. Try again.", input.trim()))
            })
            .interact_text()
            .map_err(|e| log::error!("reading abandonment after round {}: {}", round, e))
            .ok()
            .and_then(|input| Self::decision(&input))
            .unwrap_or(false)
    }
}

impl Human {
    fn decision(input: &str) -> Option<bool> {
        match input.trim().to_lowercase().as_str() {
            "yes" => Some(true),
            "no" => Some(false),
            _ => None,
        }
    }
}
