// ============================================================================
// SELECTION STATE - Estado compartido de la selección con notificaciones
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Seleccion;

/// Callback de re-render: recibe la lista actual y el flag de stock excedido
type SelectionSubscriber = Rc<dyn Fn(&Seleccion, bool)>;

/// Estado de la selección. Clonar comparte el mismo estado interno,
/// subscribers incluidos.
#[derive(Clone)]
pub struct SelectionState {
    seleccion: Rc<RefCell<Seleccion>>,
    subscribers: Rc<RefCell<Vec<SelectionSubscriber>>>,
}

impl SelectionState {
    pub fn new(inicial: Seleccion) -> Self {
        Self {
            seleccion: Rc::new(RefCell::new(inicial)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Leer sin clonar
    pub fn with<R>(&self, f: impl FnOnce(&Seleccion) -> R) -> R {
        f(&self.seleccion.borrow())
    }

    /// Copia de la lista actual
    pub fn snapshot(&self) -> Seleccion {
        self.seleccion.borrow().clone()
    }

    /// Mutar sin notificar. Quien llama decide si corresponde notificar:
    /// una mutación rechazada no debe redibujar nada.
    pub fn mutate<R>(&self, f: impl FnOnce(&mut Seleccion) -> R) -> R {
        f(&mut self.seleccion.borrow_mut())
    }

    /// Suscribirse a cambios. El callback vive tanto como el widget.
    pub fn subscribe(&self, callback: impl Fn(&Seleccion, bool) + 'static) {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers con la lista actual y el flag de
    /// stock. Se notifica sobre una copia para que un callback pueda volver
    /// a leer o mutar el estado sin chocar con el borrow.
    pub fn notify(&self) {
        let (snapshot, warning) = {
            let sel = self.seleccion.borrow();
            (sel.clone(), sel.stock_warning())
        };
        let subscribers: Vec<SelectionSubscriber> = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback(&snapshot, warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Insumo;

    fn gasa() -> Insumo {
        Insumo {
            id: 1,
            codigo: None,
            nombre: "Gasa estéril".to_string(),
            unidad: None,
            stock_actual: 10,
        }
    }

    #[test]
    fn notify_passes_current_list_and_warning_flag() {
        let state = SelectionState::new(Seleccion::new());
        let observado = Rc::new(RefCell::new(Vec::new()));

        let sink = observado.clone();
        state.subscribe(move |sel, warning| {
            sink.borrow_mut().push((sel.len(), warning));
        });

        state.mutate(|sel| sel.add(&gasa(), 3)).unwrap();
        state.notify();
        state.mutate(|sel| sel.update_cantidad(1, 12)).unwrap();
        state.notify();

        assert_eq!(*observado.borrow(), vec![(1, false), (1, true)]);
    }

    #[test]
    fn clones_share_the_same_list() {
        let state = SelectionState::new(Seleccion::new());
        let clon = state.clone();
        clon.mutate(|sel| sel.add(&gasa(), 2)).unwrap();
        assert_eq!(state.with(|sel| sel.len()), 1);
    }
}
