//! Static reference tables for the symbolic draw.
//!
//! The tables are immutable configuration data: built once at process start
//! and shared read-only across all requests. They are non-empty by
//! construction, which keeps every index pick in bounds.

use nonempty::{nonempty, NonEmpty};
use std::collections::HashMap;

use crate::types::Hexagram;

/// The fixed symbol tables consumed by the drawer.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    pub hexagrams: NonEmpty<Hexagram>,
    pub tarot: NonEmpty<String>,
    pub tarot_text: HashMap<String, String>,
    pub mantras: NonEmpty<String>,
}

impl ReferenceTables {
    /// The bundled tables: 16 hexagrams, the 22 major arcana with per-card
    /// interpretive text, and 12 mantras.
    pub fn builtin() -> Self {
        let hexagrams = nonempty![
            Hexagram::new(
                "Qian (The Creative)",
                "Pure yang. Initiative, strength, relentless motion.",
                "Momentum favors the bold entry; strength early in the chart often precedes the strongest leg.",
            ),
            Hexagram::new(
                "Kun (The Receptive)",
                "Pure yin. Devotion, patience, carrying capacity.",
                "Accumulation phase; the patient holder absorbs what the impatient trader sheds.",
            ),
            Hexagram::new(
                "Zhun (Difficulty at the Beginning)",
                "Sprouting through hard ground. Chaos before order.",
                "Early volatility is structural, not terminal; position sizing matters more than timing here.",
            ),
            Hexagram::new(
                "Meng (Youthful Folly)",
                "The inexperienced student. Learning through missteps.",
                "The crowd does not yet understand this chart; neither, perhaps, do you. Study before sizing up.",
            ),
            Hexagram::new(
                "Xu (Waiting)",
                "Nourishment through patience. Rain will come.",
                "The setup is incomplete; chasing now buys someone else's exit. Wait for confirmation.",
            ),
            Hexagram::new(
                "Song (Conflict)",
                "Contention and dispute. Opposing currents.",
                "Buyers and sellers are at war in this range; expect whipsaws until one side capitulates.",
            ),
            Hexagram::new(
                "Shi (The Army)",
                "Discipline and organized force.",
                "Coordinated capital is present; follow the general, not the stragglers.",
            ),
            Hexagram::new(
                "Bi (Holding Together)",
                "Union and alliance. The many gather around one.",
                "Community cohesion is the real liquidity; watch whether holders close ranks on dips.",
            ),
            Hexagram::new(
                "Tai (Peace)",
                "Heaven and earth in communion. Flourishing.",
                "Conditions align; trends born under Tai tend to run farther than reason suggests.",
            ),
            Hexagram::new(
                "Pi (Standstill)",
                "Stagnation. Heaven and earth do not meet.",
                "Volume dries and narratives sleep; standstill punishes leverage and rewards exits.",
            ),
            Hexagram::new(
                "Qian (Modesty)",
                "The mountain within the earth. Understatement.",
                "Quiet charts with steady hands outlast loud ones; modest growth is still growth.",
            ),
            Hexagram::new(
                "Yu (Enthusiasm)",
                "Thunder rises from the earth. Contagious energy.",
                "Enthusiasm is the fuel of every meme cycle and the accelerant of every top. Enjoy, but mark your exit.",
            ),
            Hexagram::new(
                "Sui (Following)",
                "Adapting to what leads. Joyous movement.",
                "This one follows the sector leader; its fortune is borrowed. Track the leader's health.",
            ),
            Hexagram::new(
                "Fu (Return)",
                "The turning point. Thunder within the earth.",
                "What fell returns to its root; the first higher low after capitulation is the honest signal.",
            ),
            Hexagram::new(
                "Wu Wang (Innocence)",
                "The unexpected. Acting without calculation.",
                "Gains arrive unplanned and leave the same way; do not mistake luck for a system.",
            ),
            Hexagram::new(
                "Da You (Great Possession)",
                "Fire in heaven. Abundance in clear view.",
                "Visibility attracts both capital and predators; great possession demands great custody.",
            ),
        ];

        let tarot = nonempty![
            "The Fool".to_string(),
            "The Magician".to_string(),
            "The High Priestess".to_string(),
            "The Empress".to_string(),
            "The Emperor".to_string(),
            "The Hierophant".to_string(),
            "The Lovers".to_string(),
            "The Chariot".to_string(),
            "Strength".to_string(),
            "The Hermit".to_string(),
            "Wheel of Fortune".to_string(),
            "Justice".to_string(),
            "The Hanged Man".to_string(),
            "Death".to_string(),
            "Temperance".to_string(),
            "The Devil".to_string(),
            "The Tower".to_string(),
            "The Star".to_string(),
            "The Moon".to_string(),
            "The Sun".to_string(),
            "Judgement".to_string(),
            "The World".to_string(),
        ];

        let tarot_text: HashMap<String, String> = [
            ("The Fool", "A leap into the unknown; fresh capital enters without a map. Beginnings outnumber endings here."),
            ("The Magician", "All tools on the table: liquidity, narrative, and timing. Execution decides everything."),
            ("The High Priestess", "Signals hide below the surface; on-chain flows know what the chart has not yet printed."),
            ("The Empress", "Fertile ground; the holder base grows organically and dips keep getting bought."),
            ("The Emperor", "Structure and control; large wallets set the rhythm and the range holds until they move."),
            ("The Hierophant", "Convention wins; this trade follows the established playbook rather than breaking it."),
            ("The Lovers", "A pairing decision; the token's fate is tied to its strongest pool, for better or worse."),
            ("The Chariot", "Directional conviction; momentum drives through resistance when the reins are held firmly."),
            ("Strength", "Quiet endurance beats raw force; steady accumulation outlasts loud speculation."),
            ("The Hermit", "Few are watching; attention is the scarce resource and it has not arrived yet."),
            ("Wheel of Fortune", "The cycle turns regardless of conviction; position for rotation, not for permanence."),
            ("Justice", "Valuation reverts toward what the flows can defend; excess in either direction gets corrected."),
            ("The Hanged Man", "Suspension; nothing resolves until the market re-prices from a new angle. Patience is the position."),
            ("Death", "An ending that clears the board; the old range dies so a new regime can begin."),
            ("Temperance", "Balance of inflow and outflow; the middle path holds while extremes exhaust themselves."),
            ("The Devil", "Leverage and obsession; the chains are self-made and the unwinding is violent."),
            ("The Tower", "Sudden structural break; what was built on thin liquidity comes down in one candle."),
            ("The Star", "Hope after the flush; a quiet, credible recovery that rewards the early and the calm."),
            ("The Moon", "Illusion and mixed signals; volume without direction, rumors without sources. Verify."),
            ("The Sun", "Clarity and strength in the open; the trend needs no narrative to defend itself."),
            ("Judgement", "A reckoning of past decisions; dormant wallets wake and their verdict moves the market."),
            ("The World", "A completed cycle; the move has run its arc and what follows is a new story entirely."),
        ]
        .into_iter()
        .map(|(card, text)| (card.to_string(), text.to_string()))
        .collect();

        let mantras = nonempty![
            "The chart is a mirror; what you see is your own conviction.".to_string(),
            "Liquidity is loyalty you can measure.".to_string(),
            "Patience compounds; impatience distributes.".to_string(),
            "Every candle is someone's lesson paid in full.".to_string(),
            "The narrative you chase is the exit someone else planned.".to_string(),
            "Strong hands are quiet; weak hands are loud.".to_string(),
            "A seed planted in fear grows into someone else's harvest.".to_string(),
            "Fortune favors position size, not position pride.".to_string(),
            "The market owes you nothing and offers you everything.".to_string(),
            "What pumps in silence dumps in headlines.".to_string(),
            "Hold what you understand; release what you merely hope for.".to_string(),
            "The wheel turns for every token; stand where it lifts.".to_string(),
        ];

        Self {
            hexagrams,
            tarot,
            tarot_text,
            mantras,
        }
    }

    /// Interpretive text for a card, if one is mapped.
    pub fn tarot_text_for(&self, card: &str) -> Option<&str> {
        self.tarot_text.get(card).map(String::as_str)
    }
}
