//! Walk-through of all three games.
//!
//! Run with: `cargo run --example demo`
//! (set `RUST_LOG=debug` to see the engine's log lines).
//!
//! 1. **Matching**: builds a seeded round from a small card and plays it
//!    with one deliberate mistake, then prints the accuracy.
//! 2. **Translation**: asks every prompt, always picking the first option,
//!    and prints the final score.
//! 3. **Blank puzzle**: hides words from a paragraph, places the bank in
//!    order, grades, and prints the JSON payload a screen would render.

use kata_drill_gen::{
    game_engine::view::{match_round_json, puzzle_json, translation_json},
    start_game, ActiveGame, Direction, GameMode, GameRequest, WordPair,
};

fn card() -> Vec<WordPair> {
    vec![
        WordPair::new("cat", "kucing"),
        WordPair::new("dog", "anjing"),
        WordPair::new("sun", "matahari"),
        WordPair::new("moon", "bulan"),
        WordPair::new("star", "bintang"),
        WordPair::new("tree", "pohon"),
        WordPair::new("house", "rumah"),
    ]
}

fn rule(title: &str) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {title}");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // ── 1. matching ──────────────────────────────────────────────────────────
    let mut round = start_game(GameRequest::new(GameMode::Matching { pairs: card() }).with_seed(7))?;
    rule(&format!("Matching  [{}]", round.round_id));
    if let ActiveGame::Matching(session) = &mut round.game {
        for (l, r) in session.round().left.iter().zip(&session.round().right) {
            println!("  {:<10} {:<10}", l.text, r.text);
        }
        session.select("src-0")?;
        println!("  src-0 + src-1 → {:?}", session.select("src-1")?);
        for i in 0..session.round().pair_count() {
            session.select(&format!("src-{i}"))?;
            session.select(&format!("tgt-{i}"))?;
        }
        println!("  complete: {}  accuracy: {:.0}%", session.is_complete(), session.stats().accuracy());
        println!("{}", serde_json::to_string_pretty(&match_round_json(session))?);
    }
    println!();

    // ── 2. translation ───────────────────────────────────────────────────────
    let mut round = start_game(
        GameRequest::new(GameMode::Translation { pairs: card(), direction: Direction::SourceToTarget })
            .with_seed(42),
    )?;
    rule(&format!("Translation  [{}]", round.round_id));
    if let ActiveGame::Translation(session) = &mut round.game {
        println!("{}", translation_json(session));
        while let Some(prompt) = session.current_prompt() {
            let question = prompt.prompt(session.direction()).to_string();
            let options: Vec<String> = session.current_options().iter().map(|o| o.text.clone()).collect();
            let outcome = session.answer(0, &mut round.rng)?;
            let mark = if outcome.correct { "✓" } else { " " };
            println!("  [{mark}] {question:<8} {:?} → {}", options, outcome.correct_text);
        }
        println!("  score: {}/{}", session.score(), session.total());
    }
    println!();

    // ── 3. blank puzzle ──────────────────────────────────────────────────────
    let text = "Every morning the young farmer walks across the wide green fields \
                toward the quiet river where tall trees gently sway in the wind";
    let mut round = start_game(GameRequest::new(GameMode::BlankPuzzle { text: text.into() }).with_seed(3))?;
    rule(&format!("Blank puzzle  [{}]", round.round_id));
    if let ActiveGame::BlankPuzzle(puzzle) = &mut round.game {
        let line: Vec<&str> = puzzle
            .slots()
            .iter()
            .map(|s| s.current_word.as_deref().unwrap_or("____"))
            .collect();
        println!("  {}", line.join(" "));

        let blanks: Vec<String> = puzzle.slots().iter().filter(|s| s.is_hidden).map(|s| s.id.clone()).collect();
        for slot in &blanks {
            let entry = puzzle.bank()[0].id.clone();
            puzzle.place(&entry, slot)?;
        }
        let score = puzzle.check_answers(&mut round.rng);
        println!("  score after placing the bank in order: {score}");
        println!("{}", serde_json::to_string_pretty(&puzzle_json(puzzle))?);
    }

    Ok(())
}
