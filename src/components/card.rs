use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CardProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub style: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

/// Bordered panel with an optional `:: TITLE ::` header strip.
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class="card" style={format!("display:flex; flex-direction:column; overflow:hidden; {}", props.style)}>
            { if let Some(title) = &props.title {
                html!{ <div class="card-title">{ format!(":: {} ::", title) }</div> }
            } else { html!{} } }
            <div style="flex:1; overflow:auto;">{ props.children.clone() }</div>
        </div>
    }
}
