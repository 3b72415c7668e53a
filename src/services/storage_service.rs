use crate::models::{InsumoSeleccionado, Seleccion};
use crate::utils::storage::{load_from_storage, remove_from_storage, save_to_storage};

/// Espejo persistente de la selección, una clave por paciente.
/// Todo es best-effort: si localStorage no está (modo incógnito, cuota
/// llena) la lista en memoria sigue siendo la fuente de verdad y el
/// widget funciona igual, solo que no sobrevive una recarga.
#[derive(Clone)]
pub struct StorageService {
    key: String,
}

impl StorageService {
    pub fn new(prefix: &str, paciente_id: u32) -> Self {
        Self {
            key: format!("{}{}", prefix, paciente_id),
        }
    }

    /// Cargar el espejo. Clave ausente o JSON ilegible devuelven la lista
    /// vacía, nunca un error hacia arriba.
    pub fn load(&self) -> Seleccion {
        match load_from_storage::<Vec<InsumoSeleccionado>>(&self.key) {
            Ok(Some(entradas)) => {
                log::info!("💾 Selección restaurada desde storage ({} entradas)", entradas.len());
                Seleccion::from_entries(entradas)
            }
            Ok(None) => Seleccion::new(),
            Err(e) => {
                log::warn!("⚠️ Espejo de selección ilegible, se arranca vacío: {}", e);
                Seleccion::new()
            }
        }
    }

    /// Guardar el espejo después de cada mutación. El fallo se loguea y se
    /// ignora: la sesión sigue solo en memoria.
    pub fn save(&self, seleccion: &Seleccion) {
        if let Err(e) = save_to_storage(&self.key, &seleccion.entradas()) {
            log::warn!("⚠️ No se pudo guardar la selección: {}", e);
        }
    }

    /// Borrar el espejo (después de enviar la solicitud)
    pub fn clear(&self) {
        if let Err(e) = remove_from_storage(&self.key) {
            log::warn!("⚠️ No se pudo limpiar la selección guardada: {}", e);
        }
    }
}
