//! Terminal front-end: prints the game to stdout and reads human decisions from stdin.

use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::mpsc;
use tracing::{error, warn};
use wizard::domain::derive_strategy_seed;
use wizard::players::{create_computer, HumanPlayer, HumanPrompt};
use wizard::{Card, Frontend, FrontendError, GameContext, Player, PlayerInfo};

/// Who sits at the table, consumed when the engine asks for players.
#[derive(Debug, Clone)]
pub struct TableSetup {
    /// Name of the person playing at this terminal; `None` to only watch
    pub human: Option<String>,
    pub computers: u8,
    pub strategy: String,
    pub seed: Option<u64>,
}

pub struct ConsoleFrontend {
    setup: Mutex<Option<TableSetup>>,
}

impl ConsoleFrontend {
    pub fn new(setup: TableSetup) -> Self {
        Self {
            setup: Mutex::new(Some(setup)),
        }
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn trump_label(trump_card: Option<Card>) -> String {
    match trump_card {
        Some(card) => match card.suit {
            Some(suit) => format!("{card} (trump suit {suit})"),
            None => format!("{card} (no trump)"),
        },
        None => "none turned up (no trump)".to_string(),
    }
}

#[async_trait]
impl Frontend for ConsoleFrontend {
    async fn prompt_player_creation(&self) -> Result<Vec<Player>, FrontendError> {
        let setup = self
            .setup
            .lock()
            .map_err(|_| FrontendError::Other("table setup lock poisoned".into()))?
            .take()
            .ok_or_else(|| FrontendError::Other("players were already created".into()))?;

        let mut players = Vec::new();
        if let Some(name) = setup.human {
            let (human, prompts) = HumanPlayer::channel(1);
            players.push(Player::new(name, Box::new(human)));
            tokio::spawn(answer_prompts(prompts));
        }
        for i in 0..usize::from(setup.computers) {
            let seat = players.len();
            let seed = setup.seed.map(|s| derive_strategy_seed(s, seat));
            let name = format!("{} {}", capitalize(&setup.strategy), i + 1);
            let player = create_computer(name, &setup.strategy, seed).ok_or_else(|| {
                FrontendError::Other(format!("unknown strategy '{}'", setup.strategy))
            })?;
            players.push(player);
        }
        Ok(players)
    }

    async fn display_start_game(&self) -> Result<(), FrontendError> {
        println!("=== Wizard ===");
        Ok(())
    }

    async fn display_start_round(&self, round_no: u8) -> Result<(), FrontendError> {
        println!();
        println!("--- Round {round_no} ---");
        Ok(())
    }

    async fn display_deal_in_progress(&self, pause: Duration) -> Result<(), FrontendError> {
        println!("Dealing...");
        tokio::time::sleep(pause).await;
        Ok(())
    }

    async fn display_deal_done(
        &self,
        dealer: &PlayerInfo,
        trump_card: Option<Card>,
    ) -> Result<(), FrontendError> {
        println!("{} dealt. Trump: {}", dealer.name, trump_label(trump_card));
        Ok(())
    }

    async fn display_player_bid(&self, player: &PlayerInfo, bid: u8) -> Result<(), FrontendError> {
        println!("{} bids {bid}", player.name);
        Ok(())
    }

    async fn display_bid_outcome(&self, round_no: u8, total_bids: u32) -> Result<(), FrontendError> {
        let tricks = u32::from(round_no);
        let balance = match total_bids.cmp(&tricks) {
            std::cmp::Ordering::Greater => "overbid",
            std::cmp::Ordering::Less => "underbid",
            std::cmp::Ordering::Equal => "even",
        };
        println!("Total bids {total_bids} for {tricks} tricks ({balance})");
        Ok(())
    }

    async fn display_start_trick(&self, trick_no: u8) -> Result<(), FrontendError> {
        println!("Trick {trick_no}:");
        Ok(())
    }

    async fn display_turn_taken(&self, card: Card, player: &PlayerInfo) -> Result<(), FrontendError> {
        println!("  {} plays {card}", player.name);
        Ok(())
    }

    async fn display_trick_winner(
        &self,
        winner: &PlayerInfo,
        winning_card: Card,
    ) -> Result<(), FrontendError> {
        println!("  {} takes the trick with {winning_card}", winner.name);
        Ok(())
    }

    async fn display_round_scores(&self, ctx: &GameContext) -> Result<(), FrontendError> {
        let Some(round) = ctx.current_round() else {
            return Ok(());
        };
        println!("Scores after round {}:", round.round_no());
        for player in ctx.players() {
            println!(
                "  {:<16} bid {:>2}  won {:>2}  {:>+5}  total {:>5}",
                player.name,
                round.bid(player.seat).unwrap_or(0),
                round.tricks_won(player.seat),
                round.score_delta(player.seat).unwrap_or(0),
                ctx.score(player.seat)
            );
        }
        Ok(())
    }

    async fn display_game_over(&self, ctx: &GameContext) -> Result<(), FrontendError> {
        println!();
        println!("=== Game over ===");
        for (place, (player, score)) in ctx.standings().into_iter().enumerate() {
            println!("{:>2}. {:<16} {score:>5}", place + 1, player.name);
        }
        Ok(())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Serve human prompts from stdin until the engine drops the channel.
///
/// End of input drops the pending reply, which the engine reports as a
/// disconnected player.
async fn answer_prompts(mut prompts: mpsc::Receiver<HumanPrompt>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(prompt) = prompts.recv().await {
        let answered = match prompt {
            HumanPrompt::Bid {
                player,
                round_no,
                hand,
                trump_card,
                respond,
                ..
            } => {
                println!("{player}, your hand: {}", format_cards(&hand));
                println!("Trump: {}", trump_label(trump_card));
                read_bid(&mut lines, round_no)
                    .await
                    .map(|bid| bid.map(|b| respond.send(b).is_ok()))
            }
            HumanPrompt::Card {
                player,
                hand,
                legal,
                cards_played,
                trump_suit,
                respond,
                ..
            } => {
                println!("{player}, your hand: {}", format_cards(&hand));
                let trump = trump_suit.map_or("none".to_string(), |s| s.to_string());
                if cards_played.is_empty() {
                    println!("You lead. Trump: {trump}");
                } else {
                    println!("On the table: {}  Trump: {trump}", format_cards(&cards_played));
                }
                read_card(&mut lines, &hand, &legal)
                    .await
                    .map(|card| card.map(|c| respond.send(c).is_ok()))
            }
        };
        match answered {
            Ok(Some(true)) => {}
            Ok(Some(false)) => warn!("engine stopped waiting for an answer"),
            Ok(None) => return,
            Err(e) => {
                error!(error = %e, "reading from stdin failed");
                return;
            }
        }
    }
}

fn ask(question: &str) -> std::io::Result<()> {
    let mut out = std::io::stdout();
    write!(out, "{question}")?;
    out.flush()
}

async fn read_bid(
    lines: &mut Lines<BufReader<Stdin>>,
    round_no: u8,
) -> std::io::Result<Option<u8>> {
    loop {
        ask(&format!("Your bid (0-{round_no}): "))?;
        let Some(line) = lines.next_line().await? else {
            return Ok(None);
        };
        match line.trim().parse::<u8>() {
            Ok(bid) if bid <= round_no => return Ok(Some(bid)),
            _ => println!("Enter a whole number from 0 to {round_no}."),
        }
    }
}

/// Accepts card notation ("QH", "WZ") or a 1-based position in the hand.
async fn read_card(
    lines: &mut Lines<BufReader<Stdin>>,
    hand: &[Card],
    legal: &[Card],
) -> std::io::Result<Option<Card>> {
    loop {
        ask("Your card: ")?;
        let Some(line) = lines.next_line().await? else {
            return Ok(None);
        };
        let input = line.trim();
        let chosen = match input.parse::<usize>() {
            Ok(pos) if (1..=hand.len()).contains(&pos) => Some(hand[pos - 1]),
            _ => input.parse::<Card>().ok(),
        };
        match chosen {
            Some(card) if legal.contains(&card) => return Ok(Some(card)),
            Some(card) if hand.contains(&card) => {
                println!("You must follow suit. Playable: {}", format_cards(legal));
            }
            _ => println!("Pick a card from your hand, e.g. {}", format_cards(legal)),
        }
    }
}
