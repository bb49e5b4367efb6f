use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StarRatingProps {
    pub stars: usize,
}

#[function_component(StarRating)]
pub fn star_rating(props: &StarRatingProps) -> Html {
    let stars = props.stars.min(5);
    html! {
        <div class="star-rating" aria-label={format!("{} out of 5 stars", stars)}>
            { for (0..5).map(|i| html! {
                <span class={classes!("star", (i < stars).then(|| "filled"))}>{"★"}</span>
            }) }
        </div>
    }
}
