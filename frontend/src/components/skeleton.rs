use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SkeletonCardsProps {
    #[prop_or(3)]
    pub count: usize,
}

/// Grey placeholder cards shown while a list is loading.
#[function_component(SkeletonCards)]
pub fn skeleton_cards(props: &SkeletonCardsProps) -> Html {
    html! {
        <>
            <style>
                {r#"
                    .skeleton-card {
                        background: #fff;
                        border-radius: 12px;
                        padding: 1.5rem;
                        box-shadow: 0 4px 16px rgba(15, 23, 42, 0.06);
                    }
                    .skeleton-line {
                        height: 0.9rem;
                        margin-bottom: 0.75rem;
                        border-radius: 4px;
                        background: linear-gradient(90deg, #e2e8f0 25%, #f1f5f9 50%, #e2e8f0 75%);
                        background-size: 200% 100%;
                        animation: skeleton-shimmer 1.4s ease-in-out infinite;
                    }
                    .skeleton-line.short { width: 40%; }
                    .skeleton-line.medium { width: 70%; }
                    @keyframes skeleton-shimmer {
                        from { background-position: 200% 0; }
                        to { background-position: -200% 0; }
                    }
                "#}
            </style>
            { for (0..props.count).map(|_| html! {
                <div class="skeleton-card" aria-hidden="true">
                    <div class="skeleton-line short"></div>
                    <div class="skeleton-line"></div>
                    <div class="skeleton-line"></div>
                    <div class="skeleton-line medium"></div>
                </div>
            }) }
        </>
    }
}
