use mongodb::bson::{oid::ObjectId, Bson};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Usuário (armazenado no MongoDB, coleção `users`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Chave de busca para update/delete (não é única)
    #[serde(default)]
    pub name: String,

    #[serde(default, deserialize_with = "deserialize_age")]
    pub age: i64,
}

/// Aceita `age` como Int32, Int64, Double inteiro (padrão do mongosh) ou null.
/// Doubles fracionários continuam sendo rejeitados.
fn deserialize_age<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Bson>::deserialize(deserializer)? {
        None | Some(Bson::Null) => Ok(0),
        Some(Bson::Int32(v)) => Ok(i64::from(v)),
        Some(Bson::Int64(v)) => Ok(v),
        Some(Bson::Double(v))
            if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 =>
        {
            Ok(v as i64)
        }
        Some(other) => Err(D::Error::custom(format!("invalid age: {}", other))),
    }
}

impl User {
    /// Document to insert; `_id` is left for the store to assign
    pub fn new(payload: &UserPayload) -> Self {
        User {
            id: None,
            name: payload.name.clone(),
            age: payload.age,
        }
    }
}

/// Request body for POST /user and PUT /user/{name}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: i64,
}

/// Usuário como exposto em GET /users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub age: i64,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        UserResponse {
            id: u.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: u.name,
            age: u.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn test_missing_fields_default() {
        let payload: UserPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.name, "");
        assert_eq!(payload.age, 0);
    }

    #[test]
    fn test_new_user_has_no_id_in_document() {
        let user = User::new(&UserPayload { name: "Alice".into(), age: 30 });
        let document = bson::to_document(&user).unwrap();

        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("name").unwrap(), "Alice");
        assert_eq!(document.get_i64("age").unwrap(), 30);
    }

    #[test]
    fn test_decodes_int32_age_and_missing_fields() {
        let id = ObjectId::new();
        let user: User = bson::from_document(doc! { "_id": id, "name": "Bob", "age": 41_i32 }).unwrap();
        assert_eq!(user.age, 41);

        let bare: User = bson::from_document(doc! { "_id": id }).unwrap();
        assert_eq!(bare.name, "");
        assert_eq!(bare.age, 0);

        let shell: User = bson::from_document(doc! { "_id": id, "name": "Shell", "age": 30.0_f64 }).unwrap();
        assert_eq!(shell.age, 30);

        let null_age: User = bson::from_document(doc! { "_id": id, "name": "Nil", "age": Bson::Null }).unwrap();
        assert_eq!(null_age.age, 0);

        let wide: User = bson::from_document(doc! { "_id": id, "name": "Wide", "age": 5_000_000_000_i64 }).unwrap();
        assert_eq!(wide.age, 5_000_000_000);
    }

    #[test]
    fn test_rejects_fractional_or_non_numeric_age() {
        let id = ObjectId::new();
        assert!(bson::from_document::<User>(doc! { "_id": id, "name": "Half", "age": 30.5_f64 }).is_err());
        assert!(bson::from_document::<User>(doc! { "_id": id, "name": "Text", "age": "thirty" }).is_err());
    }

    #[test]
    fn test_response_renders_hex_id() {
        let id = ObjectId::new();
        let response = UserResponse::from(User { id: Some(id), name: "Carol".into(), age: 7 });
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["_id"], id.to_hex());
        assert_eq!(json["name"], "Carol");
        assert_eq!(json["age"], 7);
    }
}
