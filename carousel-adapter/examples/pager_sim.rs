// Example: a 60fps host loop with autoplay interrupted by a user swipe.
use carousel::{BindTicket, CarouselEvent, CarouselOptions, ContentBinder};
use carousel_adapter::{Easing, Pager, PagerOptions};

struct PrintLoader;

impl ContentBinder<String> for PrintLoader {
    type Handle = BindTicket;

    fn bind(&mut self, ticket: BindTicket, item: &String) -> Option<BindTicket> {
        println!("  bind real={} url={item}", ticket.index);
        Some(ticket)
    }
}

fn main() {
    let mut pager = Pager::new(
        CarouselOptions::new().with_autoplay_interval_ms(1_000),
        PagerOptions::new(320).with_easing(Easing::EaseOutCubic),
    );
    pager.set_data((0..4).map(|i| format!("https://example.com/{i}.png")).collect());

    let mut loader = PrintLoader;
    let mut now_ms = 0u64;
    let mut frame = 0u64;

    while now_ms < 5_000 {
        now_ms += 16;
        frame += 1;

        // Simulate a swipe backwards at ~2.5s.
        if (2_500..2_516).contains(&now_ms) && pager.on_drag_start() {
            let offset = pager.offset().saturating_sub(200);
            pager.on_drag(offset);
            pager.on_drag_end(now_ms);
        }

        if pager.tick(now_ms).is_some() && frame % 4 == 0 {
            println!(
                "t={now_ms}ms offset={} visible={:?}",
                pager.offset(),
                pager.visible_slots()
            );
        }

        let events: Vec<_> = pager.drain_events().collect();
        for event in events {
            println!("t={now_ms}ms {event:?}");
            if let CarouselEvent::PageChanged { .. } = event {
                for (_, ticket) in pager.bind_visible(&mut loader) {
                    pager.controller_mut().on_content_ready(ticket);
                }
            }
        }
    }
}
