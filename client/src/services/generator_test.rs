use super::*;
use crate::state::draft::{Choice, Fanpage, Tone, Topic};
use time::macros::date;

fn post() -> ValidPost {
    ValidPost {
        title: "Launch".into(),
        topic: Topic::Product,
        tone: Tone::Friendly,
        content: "Our new blender is here".into(),
        image: None,
        fanpage: Fanpage::Page2,
        post_date: date!(2030 - 03 - 10),
    }
}

#[test]
fn placeholder_ignores_the_post() {
    let text = PlaceholderGenerator.generate(&post());
    assert_eq!(text, PLACEHOLDER_CONTENT);
    assert!(!text.is_empty());
}

#[test]
fn closures_are_generators() {
    let generator = |p: &ValidPost| format!("[{}] {}", p.tone.value(), p.title);
    let boxed: &dyn ContentGenerator = &generator;
    assert_eq!(boxed.generate(&post()), "[friendly] Launch");
}
