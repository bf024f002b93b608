//! Gallery page: searchable product cards opening into the lightbox.

use leptos::prelude::*;

use crate::components::lightbox::Lightbox;
use crate::components::search_bar::SearchBar;
use crate::state::filter::{matches, searchable_text};
use crate::state::lightbox::{LightboxGroups, LightboxState};

const GALLERY_GROUP: &str = "gallery";

struct GalleryCard {
    title: &'static str,
    description: &'static str,
    alt: &'static str,
    tags: &'static str,
    image: &'static str,
}

const CARDS: &[GalleryCard] = &[
    GalleryCard {
        title: "Oak Dining Table",
        description: "Eight-seater table in solid white oak with a hand-rubbed oil finish.",
        alt: "Long oak dining table in a sunlit room",
        tags: "dining oak table",
        image: "/assets/gallery/oak-dining-table.jpg",
    },
    GalleryCard {
        title: "Walnut Writing Desk",
        description: "Compact desk with dovetailed drawers in American walnut.",
        alt: "Dark walnut desk with brass handles",
        tags: "desk walnut study",
        image: "/assets/gallery/walnut-writing-desk.jpg",
    },
    GalleryCard {
        title: "Riempie Bench",
        description: "Traditional riempie bench in yellowwood with rawhide weave.",
        alt: "Yellowwood bench with woven leather seat",
        tags: "bench yellowwood riempie seating",
        image: "/assets/gallery/riempie-bench.jpg",
    },
    GalleryCard {
        title: "Floating Wall Shelves",
        description: "Set of three floating shelves in reclaimed oregon pine.",
        alt: "Three wooden shelves mounted on a white wall",
        tags: "shelf storage pine reclaimed",
        image: "/assets/gallery/floating-shelves.jpg",
    },
    GalleryCard {
        title: "Kiaat Sideboard",
        description: "Low sideboard in kiaat with sliding slatted doors.",
        alt: "Wide kiaat sideboard with slatted doors",
        tags: "sideboard kiaat storage",
        image: "/assets/gallery/kiaat-sideboard.jpg",
    },
    GalleryCard {
        title: "Child's Rocking Chair",
        description: "Small rocking chair in beech, sized for ages three to eight.",
        alt: "Small wooden rocking chair",
        tags: "chair beech children",
        image: "/assets/gallery/rocking-chair.jpg",
    },
];

fn card_matches(card: &GalleryCard, query: &str) -> bool {
    let text = searchable_text(&[card.title, card.description, card.alt, card.tags]);
    matches(&text, query)
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let lightbox = RwSignal::new(LightboxState::default());

    let groups = LightboxGroups::from_links(
        CARDS.iter().map(|c| (Some(GALLERY_GROUP), c.image, c.title)),
    );
    // Shared with the card click handlers; groups and CARDS share indices
    // by construction.
    let stored_groups = StoredValue::new(groups.clone());

    let none_visible = move || {
        query.with(|q| !CARDS.iter().any(|c| card_matches(c, q)))
    };

    let cards = CARDS
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let visible = move || query.with(|q| card_matches(card, q));
            let open = move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                lightbox.update(|s| {
                    stored_groups.with_value(|g| s.open(g, GALLERY_GROUP, index));
                });
            };
            view! {
                <a
                    href=card.image
                    class="gallery-card"
                    style:display=move || if visible() { "" } else { "none" }
                    on:click=open
                >
                    <img src=card.image alt=card.alt loading="lazy"/>
                    <h3>{card.title}</h3>
                    <p>{card.description}</p>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="gallery-page">
            <h1>"Gallery"</h1>
            <SearchBar id="gallerySearch" placeholder="Search the gallery..." query=query/>
            <div id="galleryGrid" class="gallery-grid">{cards}</div>
            <p
                id="galleryNoResult"
                class="no-result"
                style:display=move || if none_visible() { "block" } else { "none" }
            >
                "No pieces match your search."
            </p>
            <Lightbox groups=groups state=lightbox/>
        </section>
    }
}
