use core_types::PointerEvent;
use html::{Id, Node, query_descendant};
use slider::{SliderHost, SliderOptions};
use slider_core::{SliderError, SliderResult};

fn price_slider() -> Node {
    Node::element(
        "div",
        vec![
            ("id", Some("price")),
            ("data-rounding", Some(r#"{"1": "10", "10": "100", "50": "1000"}"#)),
            ("data-range_min", Some("0")),
            ("data-range_max", Some("2000")),
            ("data-cur_min", Some("120")),
            ("data-cur_max", Some("900")),
            ("data-upper-limit", Some("5000")),
        ],
        vec![
            Node::element("div", vec![("class", Some("range-bar"))], Vec::new()),
            Node::element("div", vec![("class", Some("range-grip-left"))], Vec::new()),
            Node::element("div", vec![("class", Some("range-grip-right"))], Vec::new()),
        ],
    )
}

fn find(host: &SliderHost, selector: &str) -> SliderResult<Id> {
    query_descendant(host.dom(), selector).ok_or_else(|| SliderError::MissingElement {
        option: "element",
        selector: selector.to_string(),
    })
}

fn run() -> SliderResult<()> {
    let mut host = SliderHost::new(Node::document(vec![price_slider()]));
    let el = find(&host, "#price")?;

    host.init(
        el,
        SliderOptions::new().on_value_changed(|cause, min, max| {
            log::info!("{cause}: [{min}, {max}]");
        }),
    )?;

    let right = host.elements(el)?.right;
    if let Some(grip) = right {
        host.pointer_down(grip);
        for step in 0..=10 {
            let track_fraction = 0.4 + f64::from(step) * 0.07;
            host.dispatch_pointer(PointerEvent::Move { track_fraction });
        }
        host.dispatch_pointer(PointerEvent::Up);
    }

    log::info!(
        "right extreme reached: {}",
        host.is_handle_to_right_extreme(el)?
    );
    host.set_range(el, 100.0, 1500.0)?;
    host.teardown(el)?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
