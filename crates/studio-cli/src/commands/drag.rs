use std::sync::Arc;

use anyhow::{Context, Result, bail};
use serde_json::json;
use studio_application::{AssistantWidget, ChatPanel};
use studio_core::config::StudioConfig;
use studio_core::geometry::Point;
use studio_core::pointer::{PointerEvent, PointerPhase, TouchPoint};
use studio_infrastructure::HeadlessPage;
use studio_interaction::KeywordResponder;

pub fn run(config: &StudioConfig, moves: &str, touch: bool) -> Result<()> {
    let path = parse_path(moves)?;
    let Some((&press, rest)) = path.split_first() else {
        bail!("--moves needs at least one \"x,y\" pair");
    };

    let page = Arc::new(HeadlessPage::from_settings(&config.widget));
    let chat = Arc::new(ChatPanel::from_settings(
        &config.chat,
        Arc::new(KeywordResponder::new()),
        page.clone(),
    ));
    let widget = AssistantWidget::new(page.clone(), chat.clone(), config.widget.margin);
    let start = widget.position();

    let mut last = press;
    widget.handle_pointer(&pointer(press, PointerPhase::Down, touch, last)?);

    let mut positions = Vec::with_capacity(rest.len());
    for &point in rest {
        widget.handle_pointer(&pointer(point, PointerPhase::Move, touch, last)?);
        last = point;
        positions.push(widget.position());
    }

    widget.handle_pointer(&pointer(last, PointerPhase::Up, touch, last)?);
    let opened_chat = widget.click();

    let summary = json!({
        "start": start,
        "positions": positions,
        "end": widget.position(),
        "bounds": {
            "min_left": config.widget.margin,
            "max_left": widget.bounds().max_left(),
            "min_top": config.widget.margin,
            "max_top": widget.bounds().max_top(),
        },
        "click_opens_chat": opened_chat,
        "chat_open": chat.is_open(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn pointer(point: Point, phase: PointerPhase, touch: bool, last: Point) -> Result<PointerEvent> {
    if !touch {
        return Ok(PointerEvent::mouse(point.x, point.y, phase));
    }

    // A real touch-end carries no remaining contacts.
    let contacts = if phase.is_release() {
        Vec::new()
    } else {
        vec![TouchPoint {
            identifier: 0,
            client_x: point.x,
            client_y: point.y,
        }]
    };
    PointerEvent::touch(&contacts, phase, last).context("touch event without a contact")
}

fn parse_path(moves: &str) -> Result<Vec<Point>> {
    moves
        .split_whitespace()
        .map(|pair| {
            let (x, y) = pair
                .split_once(',')
                .with_context(|| format!("expected \"x,y\", got {pair:?}"))?;
            let x: f64 = x.trim().parse().with_context(|| format!("bad x in {pair:?}"))?;
            let y: f64 = y.trim().parse().with_context(|| format!("bad y in {pair:?}"))?;
            Ok(Point::new(x, y))
        })
        .collect()
}
