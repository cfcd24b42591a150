use crate::alarm::{Day, abbreviated_day_label};
use crate::presenter::{AlarmPresenter, AlarmView, Node};

const MUTED: &str = "text-muted";

/// Builds the card element tree: alarm icon, time, day region, close button.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardPresenter;

impl AlarmPresenter for CardPresenter {
    type Output = Node;

    fn render(&self, view: &AlarmView) -> Node {
        let dom_id = view.dom_id();
        let muted = view.strategy.is_time_muted();

        let time_column = Node::new("div").with_classes(&["col-6"]).with_child(
            Node::new("div")
                .with_classes(&["row", "row-cols-2"])
                .with_child(alarm_icon(muted))
                .with_child(
                    Node::new("p")
                        .with_classes(&["col-7", "h1", "mb-0"])
                        .with_class_if(MUTED, muted)
                        .with_text(view.time.clone()),
                ),
        );

        let days_column = Node::new("div")
            .with_classes(&["col-4", "ml-2", "user-select-none"])
            .with_child(day_region(view));

        let close_column = Node::new("div").with_classes(&["col-1"]).with_child(
            Node::new("button")
                .with_id(format!("close-{dom_id}"))
                .with_classes(&["close", "icon-close"])
                .with_text("×"),
        );

        Node::new("div")
            .with_id(dom_id)
            .with_classes(&[
                "row",
                "row-cols-3",
                "mb-3",
                "bg-white",
                "border",
                "align-items-center",
                "pb-3",
                "pt-4",
            ])
            .with_child(time_column)
            .with_child(days_column)
            .with_child(close_column)
    }
}

fn alarm_icon(deactivated: bool) -> Node {
    Node::new("span")
        .with_classes(&["icon-alarm"])
        .with_class_if(MUTED, deactivated)
}

fn day_region(view: &AlarmView) -> Node {
    if !view.strategy.shows_day_letters() {
        return Node::new("div")
            .with_classes(&["mb-0", "text-nowrap"])
            .with_text(abbreviated_day_label(&view.active_days));
    }

    let row = Node::new("div")
        .with_classes(&["row", "flex-nowrap"])
        .with_class_if(MUTED, view.strategy.are_days_muted());
    Day::ALL.into_iter().fold(row, |row, day| {
        row.with_child(
            Node::new("div").with_classes(&["col", "px-0"]).with_child(
                Node::new("p")
                    .with_classes(&["my-0"])
                    .with_text(day.initial().to_string()),
            ),
        )
    })
}

/// One-line terminal rendering, e.g. `06:45  Mon, Wed, Fri`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPresenter;

impl AlarmPresenter for TextPresenter {
    type Output = String;

    fn render(&self, view: &AlarmView) -> String {
        let days = if view.strategy.shows_day_letters() {
            Day::ALL
                .into_iter()
                .map(|day| day.initial().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            abbreviated_day_label(&view.active_days)
        };
        if view.strategy.is_time_muted() {
            format!("{} (off)  {days}", view.time)
        } else {
            format!("{}  {days}", view.time)
        }
    }
}
