use yew::prelude::*;

use crate::model::Profile;

#[derive(Properties, PartialEq, Clone)]
pub struct ProfileStatsProps {
    pub profile: Profile,
}

#[function_component(ProfileStats)]
pub fn profile_stats(props: &ProfileStatsProps) -> Html {
    let row_style = "display:flex; justify-content:space-between; gap:8px;";
    let value_style = "color:var(--primary); font-variant-numeric:tabular-nums; font-weight:600;";
    let p = &props.profile;
    html! {
        <div style="display:flex; flex-direction:column; gap:4px; font-size:12px; opacity:0.85;">
            <div style={row_style}><span>{"COMPLETED:"}</span><span style={value_style}>{ p.levels_completed }</span></div>
            <div style={row_style}><span>{"ACCURACY:"}</span><span style={value_style}>{ format!("{}%", p.accuracy_rate) }</span></div>
            <div style={row_style}><span>{"BEST_TIME:"}</span><span style={value_style}>{ p.fastest_clear_label() }</span></div>
            <div style={row_style}>
                <span>{"RETENTION:"}</span>
                <span style="color:#facc15; font-weight:700;">{ format!("{} NODES", p.retention_best) }</span>
            </div>
        </div>
    }
}
