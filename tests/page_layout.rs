// The browser shell looks these elements up by id and toggles only their
// `hidden` class, so the page must carry the layout class alongside it.

const PAGE: &str = include_str!("../index.html");

fn element_tag(id: &str) -> &'static str {
    let needle = format!("id=\"{id}\"");
    let at = PAGE
        .find(&needle)
        .unwrap_or_else(|| panic!("#{id} missing from index.html"));
    let end = at + PAGE[at..].find('>').unwrap();
    &PAGE[at..end]
}

#[test]
fn phase_overlays_keep_overlay_class() {
    for id in ["start-overlay", "game-over", "won", "loading"] {
        let tag = element_tag(id);
        assert!(tag.contains("overlay"), "#{id} lost its layout class: {tag}");
    }
}

#[test]
fn overlays_start_hidden() {
    for id in ["start-overlay", "game-over", "won", "hud", "hud-fps", "error"] {
        assert!(element_tag(id).contains("hidden"), "#{id} should start hidden");
    }
}

#[test]
fn shell_elements_present() {
    for id in [
        "canvas",
        "hud-score",
        "hud-level",
        "hud-lives",
        "start-level",
        "final-score",
        "won-score",
        "start-btn",
        "restart-btn",
        "play-again-btn",
    ] {
        element_tag(id);
    }
}
