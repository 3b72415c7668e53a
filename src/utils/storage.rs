use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando datos: {}", e))?;
    storage
        .set_item(key, &json)
        .map_err(|_| "Error guardando en localStorage".to_string())?;
    Ok(())
}

/// Carga tolerante: `Ok(None)` si la clave no existe, `Err` si existe pero
/// no es JSON válido del tipo esperado. Quien llama decide si el dato
/// corrupto se descarta o se reporta.
pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Result<Option<T>, String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    let json = match storage.get_item(key) {
        Ok(Some(json)) => json,
        Ok(None) => return Ok(None),
        Err(_) => return Err("Error leyendo localStorage".to_string()),
    };
    serde_json::from_str(&json)
        .map(Some)
        .map_err(|e| format!("Dato persistido ilegible: {}", e))
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .remove_item(key)
        .map_err(|_| "Error eliminando de localStorage".to_string())
}
