// Example: drive the paging core by hand, playing the role of the rendering surface.
use carousel::{CarouselOptions, PagingController, SurfaceCommand};

fn main() {
    let mut c = PagingController::new(CarouselOptions::new().with_autoplay_interval_ms(2_000));

    let generation = c.set_data(vec![
        "https://example.com/a.png",
        "https://example.com/b.png",
        "https://example.com/c.png",
    ]);

    // The surface drops its cached pages, then acknowledges and shows its first page.
    c.on_reload_complete(generation);
    c.on_first_display();

    let mut shown = None;
    for now_ms in (0..=9_000u64).step_by(500) {
        c.tick(now_ms);

        for command in c.drain_commands() {
            match command {
                SurfaceCommand::JumpTo { index } => shown = Some(index),
                SurfaceCommand::AnimateTo { to, .. } => {
                    // Pretend the animation finished instantly and report where it landed.
                    shown = Some(to);
                }
                other => println!("surface: {other:?}"),
            }
        }
        if let Some(index) = shown.take() {
            c.on_settle(index);
            c.drain_commands().count();
        }

        for event in c.drain_events() {
            println!("t={now_ms}ms {event:?}");
        }
    }

    let v = c.virtual_index().unwrap_or_default();
    println!(
        "done: virtual={v} real={:?} item={:?}",
        c.real_index(),
        c.item_for_slot(v)
    );
}
