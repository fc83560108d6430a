//! Listing card view model.
//!
//! Pure projection of a backend listing row. Time-dependent fields (boost
//! badge, relative date) are computed against an injected [`Clock`].

use bridge_traits::time::Clock;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shown when a listing has no photo.
pub const FALLBACK_IMAGE_URL: &str = "https://images.pexels.com/photos/4386321/pexels-photo-4386321.jpeg?auto=compress&cs=tinysrgb&w=400";

pub const SOLD_LABEL: &str = "VENDU";
pub const BOOST_LABEL: &str = "Sponsorisé";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Sold,
    #[serde(other)]
    Other,
}

/// Row of the backend `listings` table, reduced to what the card reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    /// Whole francs CFA
    pub price: i64,
    pub district: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub photos: Option<Vec<String>>,
    #[serde(default)]
    pub boosted_until: Option<DateTime<Utc>>,
    pub status: ListingStatus,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingCardOptions {
    pub seller_name: Option<String>,
    pub seller_rating: Option<f64>,
    /// The caller handles presses itself instead of linking to the detail page.
    pub has_press_handler: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum CardTarget {
    Link(String),
    Press,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerView {
    pub name: String,
    /// One decimal, e.g. "4.5"
    pub rating: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingCardView {
    pub image_url: String,
    pub title: String,
    pub price_label: String,
    pub district: String,
    pub date_label: String,
    pub boosted: bool,
    pub sold: bool,
    /// Set only when the listing has more than one photo
    pub photo_count: Option<usize>,
    pub seller: Option<SellerView>,
    pub target: CardTarget,
}

impl ListingCardView {
    pub fn project(listing: &Listing, options: &ListingCardOptions, clock: &dyn Clock) -> Self {
        let now = clock.now();
        let photos = listing.photos.as_deref().unwrap_or_default();

        let seller = options.seller_name.as_ref().map(|name| SellerView {
            name: name.clone(),
            rating: options
                .seller_rating
                .filter(|rating| *rating != 0.0)
                .map(|rating| format!("{rating:.1}")),
        });

        let target = if options.has_press_handler {
            CardTarget::Press
        } else {
            CardTarget::Link(format!("/listings/{}", listing.id))
        };

        Self {
            image_url: photos
                .first()
                .cloned()
                .unwrap_or_else(|| FALLBACK_IMAGE_URL.to_string()),
            title: listing.title.clone(),
            price_label: format_price(listing.price),
            district: listing.district.clone(),
            date_label: format_relative_date(listing.created_at, now),
            boosted: listing.boosted_until.is_some_and(|until| until > now),
            sold: listing.status == ListingStatus::Sold,
            photo_count: (photos.len() > 1).then_some(photos.len()),
            seller,
            target,
        }
    }
}

/// `25000` → `"25 000 FCFA"`
pub fn format_price(price: i64) -> String {
    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let sign = if price < 0 { "-" } else { "" };
    format!("{sign}{grouped} FCFA")
}

/// French relative date; falls back to `dd/mm/yyyy` after a week.
pub fn format_relative_date(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at);

    if elapsed.num_minutes() < 1 {
        "À l'instant".to_string()
    } else if elapsed.num_hours() < 1 {
        format!("Il y a {} min", elapsed.num_minutes())
    } else if elapsed.num_days() < 1 {
        format!("Il y a {} h", elapsed.num_hours())
    } else if elapsed.num_days() < 2 {
        "Hier".to_string()
    } else if elapsed.num_days() < 7 {
        format!("Il y a {} jours", elapsed.num_days())
    } else {
        created_at.format("%d/%m/%Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::time::FixedClock;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn listing() -> Listing {
        Listing {
            id: "42".to_string(),
            title: "Moto Djakarta".to_string(),
            price: 350_000,
            district: "Lobia".to_string(),
            created_at: now() - Duration::hours(3),
            photos: Some(vec![
                "https://cdn.example/a.jpg".to_string(),
                "https://cdn.example/b.jpg".to_string(),
            ]),
            boosted_until: Some(now() + Duration::days(1)),
            status: ListingStatus::Active,
        }
    }

    #[test]
    fn test_project_full_card() {
        let view = ListingCardView::project(
            &listing(),
            &ListingCardOptions {
                seller_name: Some("Awa".to_string()),
                seller_rating: Some(4.46),
                has_press_handler: false,
            },
            &FixedClock(now()),
        );

        assert_eq!(view.image_url, "https://cdn.example/a.jpg");
        assert_eq!(view.price_label, "350 000 FCFA");
        assert_eq!(view.date_label, "Il y a 3 h");
        assert!(view.boosted);
        assert!(!view.sold);
        assert_eq!(view.photo_count, Some(2));
        assert_eq!(
            view.seller,
            Some(SellerView {
                name: "Awa".to_string(),
                rating: Some("4.5".to_string())
            })
        );
        assert_eq!(view.target, CardTarget::Link("/listings/42".to_string()));
    }

    #[test]
    fn test_project_bare_sold_listing() {
        let mut listing = listing();
        listing.photos = None;
        listing.boosted_until = Some(now() - Duration::minutes(1));
        listing.status = ListingStatus::Sold;

        let options = ListingCardOptions {
            has_press_handler: true,
            ..Default::default()
        };
        let view = ListingCardView::project(&listing, &options, &FixedClock(now()));

        assert_eq!(view.image_url, FALLBACK_IMAGE_URL);
        assert!(!view.boosted);
        assert!(view.sold);
        assert_eq!(view.photo_count, None);
        assert_eq!(view.seller, None);
        assert_eq!(view.target, CardTarget::Press);
    }

    #[test]
    fn test_zero_rating_hidden() {
        let options = ListingCardOptions {
            seller_name: Some("Koffi".to_string()),
            seller_rating: Some(0.0),
            has_press_handler: false,
        };
        let view = ListingCardView::project(&listing(), &options, &FixedClock(now()));
        assert_eq!(view.seller.unwrap().rating, None);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "0 FCFA");
        assert_eq!(format_price(500), "500 FCFA");
        assert_eq!(format_price(1000), "1 000 FCFA");
        assert_eq!(format_price(1_250_000), "1 250 000 FCFA");
        assert_eq!(format_price(-2500), "-2 500 FCFA");
    }

    #[test]
    fn test_relative_dates() {
        let at = |d: Duration| format_relative_date(now() - d, now());
        assert_eq!(at(Duration::seconds(30)), "À l'instant");
        assert_eq!(at(Duration::minutes(12)), "Il y a 12 min");
        assert_eq!(at(Duration::hours(23)), "Il y a 23 h");
        assert_eq!(at(Duration::hours(30)), "Hier");
        assert_eq!(at(Duration::days(4)), "Il y a 4 jours");
        assert_eq!(at(Duration::days(10)), "05/06/2024");
        assert_eq!(format_relative_date(now() + Duration::hours(1), now()), "À l'instant");
    }

    #[test]
    fn test_listing_row_deserializes_with_nulls() {
        let row: Listing = serde_json::from_value(serde_json::json!({
            "id": "7",
            "title": "Table",
            "price": 15000,
            "district": "Kennedy",
            "created_at": "2024-06-01T08:00:00Z",
            "photos": null,
            "boosted_until": null,
            "status": "pending"
        }))
        .unwrap();

        assert_eq!(row.status, ListingStatus::Other);
        assert!(row.photos.is_none());
    }
}
