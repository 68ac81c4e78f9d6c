//! Wire shapes of the favorites indexer.

use serde::{Deserialize, Serialize};

use crate::domain::{Favorite, NewFavorite, WalletAddress};

#[derive(Debug, Deserialize)]
pub struct FavoritesResponse {
    #[serde(default)]
    pub favorites: Vec<Favorite>,
}

/// Body of `POST /favorites`.
#[derive(Debug, Serialize)]
pub struct CreateFavoriteRequest<'a> {
    pub address: &'a WalletAddress,
    #[serde(flatten)]
    pub favorite: &'a NewFavorite,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(alias = "error")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntityKind, FavoriteScope, ItemId, Sport};
    use serde_json::json;

    #[test]
    fn create_request_is_flat_camel_case() {
        let wallet = WalletAddress::from("0xfan");
        let favorite = NewFavorite::new(
            FavoriteScope::sports(Sport::Football, EntityKind::Team),
            ItemId::from(50_u64),
        );
        let body = CreateFavoriteRequest {
            address: &wallet,
            favorite: &favorite,
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "address": "0xfan",
                "category": "sports",
                "subcategory": "football",
                "type": "team",
                "itemId": "50",
            })
        );
    }

    #[test]
    fn favorites_response_defaults_to_empty() {
        let response: FavoritesResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.favorites.is_empty());
    }

    #[test]
    fn error_body_accepts_error_key() {
        let body: ErrorBody = serde_json::from_value(json!({"error": "not found"})).unwrap();
        assert_eq!(body.message, "not found");
    }
}
