use thicket::{FocusConfig, Result};

use crate::focusgym::{Direction, FocusGym};

const FORWARD: [&str; 5] = ["edit name", "edit email", "clear log", "ok", "cancel"];

fn walk(gym: &mut FocusGym, direction: Direction, steps: usize) -> Vec<String> {
    (0..steps)
        .map(|_| gym.step(direction).unwrap_or("-").to_string())
        .collect()
}

#[test]
fn forward_walk_wraps() -> Result<()> {
    let mut gym = FocusGym::new(FocusConfig::new())?;
    let seen = walk(&mut gym, Direction::Next, 6);
    assert_eq!(seen[..5], FORWARD);
    assert_eq!(seen[5], "edit name");
    Ok(())
}

#[test]
fn reverse_walk_mirrors_forward() -> Result<()> {
    let mut gym = FocusGym::new(FocusConfig::new())?;
    let seen = walk(&mut gym, Direction::Prev, 5);
    let mut expected = FORWARD.to_vec();
    expected.reverse();
    assert_eq!(seen, expected);
    Ok(())
}

#[test]
fn no_wrap_stops_on_last_button() -> Result<()> {
    let mut gym = FocusGym::new(FocusConfig::new().wrap(false))?;
    let seen = walk(&mut gym, Direction::Next, 7);
    assert_eq!(seen[4], "cancel");
    assert_eq!(seen[5], "-");
    assert_eq!(seen[6], "-");
    assert_eq!(gym.focused_caption(), Some("cancel"));
    Ok(())
}

#[test]
fn added_action_joins_the_cycle() -> Result<()> {
    let mut gym = FocusGym::new(FocusConfig::new())?;
    gym.add_action("apply")?;
    let seen = walk(&mut gym, Direction::Next, 6);
    assert_eq!(seen[5], "apply");
    Ok(())
}

#[test]
fn removing_focused_action_drops_focus() -> Result<()> {
    let mut gym = FocusGym::new(FocusConfig::new())?;
    let id = gym.add_action("apply")?;
    walk(&mut gym, Direction::Prev, 1);
    assert_eq!(gym.focused_caption(), Some("apply"));

    assert!(gym.remove_action(id));
    assert!(gym.focus().current().is_none());
    assert!(!gym.remove_action(id));
    assert_eq!(gym.step(Direction::Prev), Some("cancel"));
    Ok(())
}

#[test]
fn dump_marks_focus() -> Result<()> {
    let mut gym = FocusGym::new(FocusConfig::new())?;
    gym.step(Direction::Next);
    let out = gym.dump()?;
    let focused: Vec<&str> = out.lines().filter(|l| l.contains("FOCUSED")).collect();
    assert_eq!(focused.len(), 1);
    assert!(focused[0].contains("button"));
    assert!(out.lines().next().is_some_and(|l| l.contains("scrollable")));
    Ok(())
}
