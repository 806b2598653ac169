use crate::util::format_clock;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TimeDisplayProps {
    pub label: AttrValue,
    pub secs: u64,
    /// Countdown mode renders plain seconds and turns red near zero.
    #[prop_or_default]
    pub countdown: bool,
}

#[function_component(TimeDisplay)]
pub fn time_display(props: &TimeDisplayProps) -> Html {
    let (text, color) = if props.countdown {
        let urgent = props.secs < 15;
        (format!("{}s", props.secs), if urgent { "#ff4141" } else { "var(--primary)" })
    } else {
        (format_clock(props.secs), "var(--primary)")
    };
    html! {<div style="display:flex; align-items:baseline; gap:8px;">
        <span style="font-size:10px; opacity:0.6; text-transform:uppercase;">{ props.label.clone() }</span>
        <span style={format!("font-size:20px; font-weight:800; font-variant-numeric:tabular-nums; color:{};", color)}>{ text }</span>
    </div>}
}
