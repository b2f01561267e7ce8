mod args;

use anyhow::Context;
use tagcloud_ui::{
    EventResponse, Size, TagCloudConfig, TagCloudController, TagCloudEvent, TagCloudFrame,
    HINT_TEXT_COLOR,
};

use crate::args::{parse_args, Args, Click, DemoError};

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(args) => args,
        Err(DemoError::Usage(usage)) => {
            println!("{usage}");
            return Ok(());
        }
        Err(err) => return Err(err).context("invalid arguments"),
    };

    run(args)
}

fn run(args: Args) -> anyhow::Result<()> {
    let container = Size::new(args.width, args.height);
    let config = TagCloudConfig::default()
        .with_padding(args.padding)
        .with_duplicate_weights(args.duplicate_weights);
    let mut controller = TagCloudController::new(config);
    controller.set_area_hint(args.hint);

    for (identifier, weight) in args.tags {
        controller.add_tag(identifier, weight);
    }
    controller.request_layout(container);

    for click in args.clicks {
        match click {
            Click::Tag(identifier) => {
                let response = controller.handle_event(TagCloudEvent::TagClicked(identifier));
                if let EventResponse::SelectionChanged {
                    identifier,
                    selected,
                } = response
                {
                    log::info!("{identifier} selected={selected}");
                } else {
                    log::warn!("click ignored: {response:?}");
                }
            }
            Click::At(point) => match controller.click_at(point) {
                Some(selected) => log::info!("click at {point:?} selected={selected}"),
                None => log::warn!("no tag at {point:?}"),
            },
        }
    }

    let frame = controller
        .request_layout(container)
        .frame()
        .cloned()
        .context("layout pass was deferred")?;
    print_frame(&controller, &frame);
    Ok(())
}

fn print_frame(controller: &TagCloudController, frame: &TagCloudFrame) {
    let measured = frame.measured_size();
    println!(
        "container {}x{} -> measured {}x{} ({} rows)",
        frame.container.width,
        frame.container.height,
        measured.width,
        measured.height,
        frame.rows.len()
    );
    for (index, row) in frame.rows().enumerate() {
        println!("row {index}:");
        for tag in row {
            let marker = if controller.is_selected(&tag.identifier) {
                "*"
            } else {
                " "
            };
            let appearance = controller.appearance(&tag.identifier);
            println!(
                "  {marker} {:<20} weight {:>8.2}  size {:>6.2}  at ({:.1}, {:.1}) {:.1}x{:.1}  #{:08X} on #{:08X}",
                tag.identifier,
                tag.weight,
                tag.render_size,
                tag.bounds.x,
                tag.bounds.y,
                tag.bounds.width,
                tag.bounds.height,
                appearance.text_color.to_argb_u32(),
                appearance.background.to_argb_u32()
            );
        }
    }
    if let Some(hint) = &frame.hint {
        println!(
            "hint {:?} at ({:.1}, {:.1}) #{:08X}",
            hint.text,
            hint.bounds.x,
            hint.bounds.y,
            HINT_TEXT_COLOR.to_argb_u32()
        );
    }
    let selected: Vec<&str> = controller.selected_tags().collect();
    println!("selected: [{}]", selected.join(", "));
}
