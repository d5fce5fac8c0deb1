use serde_json::{json, Value};

use crate::game_engine::{
    games::{
        blank_puzzle::BlankPuzzle,
        matching::MatchSession,
        translation::TranslationSession,
    },
    models::{AnswerOption, Token},
};

/// Render one match-game token with its play state.
fn token_json(t: &Token, session: &MatchSession) -> Value {
    let selected = session.selected().map_or(false, |s| s.id == t.id);
    json!({
        "id": t.id,
        "text": t.text,
        "language": t.language,
        "isMatched": session.is_matched(t.pair_id),
        "isIncorrect": session.is_flagged_incorrect(t.pair_id),
        "isSelected": selected,
    })
}

/// Payload for the matching screen. Token ids are the ones
/// [`MatchSession::select`] expects.
pub fn match_round_json(session: &MatchSession) -> Value {
    let round = session.round();
    let stats = session.stats();
    json!({
        "left":  round.left.iter().map(|t| token_json(t, session)).collect::<Vec<_>>(),
        "right": round.right.iter().map(|t| token_json(t, session)).collect::<Vec<_>>(),
        "matched": session.matched_count(),
        "total": round.pair_count(),
        "isComplete": session.is_complete(),
        "stats": {
            "attempts": stats.attempts,
            "correctMatches": stats.correct_matches,
            "accuracy": stats.accuracy(),
            "elapsedMs": stats.elapsed_ms(),
        },
    })
}

/// Option texts only; correctness is revealed by answering.
pub fn choice_set_json(options: &[AnswerOption]) -> Value {
    Value::Array(
        options
            .iter()
            .enumerate()
            .map(|(i, o)| json!({ "index": i, "text": o.text }))
            .collect(),
    )
}

pub fn translation_json(session: &TranslationSession) -> Value {
    let prompt = session
        .current_prompt()
        .map(|p| p.prompt(session.direction()).to_string());
    json!({
        "mode": session.direction().to_string(),
        "prompt": prompt,
        "options": choice_set_json(session.current_options()),
        "score": session.score(),
        "total": session.total(),
        "isComplete": session.is_complete(),
    })
}

/// Payload for the word-placement screen. Blank slots never carry their
/// original word.
pub fn puzzle_json(puzzle: &BlankPuzzle) -> Value {
    let slots: Vec<Value> = puzzle
        .slots()
        .iter()
        .map(|s| {
            json!({
                "id": s.id,
                "isHidden": s.is_hidden,
                "currentWord": s.current_word,
            })
        })
        .collect();
    let bank: Vec<Value> = puzzle
        .bank()
        .iter()
        .map(|e| json!({ "id": e.id, "word": e.word }))
        .collect();
    json!({ "slots": slots, "bank": bank })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_engine::{
        games::blank_puzzle::build_blank_puzzle,
        models::{Direction, WordPair},
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pairs() -> Vec<WordPair> {
        vec![
            WordPair::new("cat", "kucing"),
            WordPair::new("dog", "anjing"),
            WordPair::new("sun", "matahari"),
            WordPair::new("moon", "bulan"),
        ]
    }

    #[test]
    fn hidden_slots_do_not_leak_answers() {
        let mut rng = StdRng::seed_from_u64(21);
        let text = "Every morning the young farmer walks across wide green fields toward quiet river";
        let puzzle = build_blank_puzzle(text, &mut rng).unwrap();
        let v = puzzle_json(&puzzle);
        for slot in v["slots"].as_array().unwrap() {
            assert!(slot.get("originalWord").is_none());
            if slot["isHidden"] == json!(true) {
                assert!(slot["currentWord"].is_null());
            }
        }
        assert_eq!(v["bank"].as_array().unwrap().len(), puzzle.bank().len());
    }

    #[test]
    fn options_do_not_leak_correctness() {
        let mut rng = StdRng::seed_from_u64(22);
        let s = TranslationSession::new(pairs(), Direction::SourceToTarget, 2, &mut rng).unwrap();
        let v = translation_json(&s);
        assert_eq!(v["mode"], json!("en-to-id"));
        for o in v["options"].as_array().unwrap() {
            assert!(o.get("is_correct").is_none());
            assert!(o.get("isCorrect").is_none());
        }
    }

    #[test]
    fn match_view_tracks_selection() {
        let mut rng = StdRng::seed_from_u64(23);
        let mut s = MatchSession::new(pairs(), 5, &mut rng).unwrap();
        s.select("src-0").unwrap();
        let v = match_round_json(&s);
        let selected: Vec<&Value> = v["left"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|t| t["isSelected"] == json!(true))
            .collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0]["id"], json!("src-0"));
        assert_eq!(v["total"], json!(4));
    }

    #[test]
    fn rendered_token_ids_drive_the_session() {
        let mut rng = StdRng::seed_from_u64(24);
        let mut s = MatchSession::new(pairs(), 5, &mut rng).unwrap();
        let v = match_round_json(&s);
        let id = v["right"][0]["id"].as_str().unwrap().to_string();
        assert_eq!(s.select(&id).unwrap(), crate::game_engine::SelectOutcome::Selected);
        assert!(v["stats"]["elapsedMs"].is_null());
    }
}
