//! src/app/etat.rs
//!
//! État de la calculatrice (sans vue) : le tampon d’entrée + le dernier résultat.
//!
//! Contrats :
//! - `apply_button` est pure : (tampon, Ans, touche) -> (nouveau tampon, nouvel Ans).
//! - Aucune erreur ne remonte : tout échec d’évaluation devient le marqueur "Error".
//! - Chaque session possède son propre AppCalc; rien n’est partagé.
//! - L’historique (expression, résultat) ne reçoit que les `=` réussis, le plus récent
//!   en tête, borné à HISTORIQUE_MAX.

use std::collections::VecDeque;

use tracing::debug;

use super::touches::{Action, ButtonId};
use crate::noyau::{evaluate_to_string, ERREUR_AFFICHEE};

/// Nombre d’entrées gardées dans l’historique (les plus anciennes sortent).
pub const HISTORIQUE_MAX: usize = 50;

/// Transition du pavé.
///
/// - jeton : ajoute son libellé, sans validation
/// - C     : tampon vide, Ans conservé
/// - DEL   : retire le dernier caractère (no-op si vide)
/// - =     : tampon <- résultat et Ans <- résultat; en cas d’échec tampon <- "Error", Ans inchangé
/// - Ans   : ajoute Ans s’il existe, sinon no-op
pub fn apply_button(
    buffer: &str,
    last_result: Option<&str>,
    button: ButtonId,
) -> (String, Option<String>) {
    let ans = last_result.map(str::to_owned);

    match button.action() {
        Action::Inserer(txt) => (format!("{buffer}{txt}"), ans),

        Action::Clear => (String::new(), ans),

        Action::Del => {
            let mut s = buffer.to_owned();
            s.pop();
            (s, ans)
        }

        Action::Evaluer => match evaluate_to_string(buffer) {
            Ok(resultat) => (resultat.clone(), Some(resultat)),
            Err(marque) => (marque.to_owned(), ans),
        },

        Action::Rappel => match last_result {
            Some(r) => (format!("{buffer}{r}"), ans),
            None => (buffer.to_owned(), None),
        },
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur (ExpressionBuffer) ---
    pub entree: String,

    // --- dernier résultat réussi (LastResult), texte déjà formaté ---
    pub dernier_resultat: Option<String>,

    // --- historique : (expression, résultat), le plus récent d’abord ---
    pub historique: VecDeque<(String, String)>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            dernier_resultat: None,
            historique: VecDeque::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /// Une touche = une transition atomique.
    pub fn appuyer(&mut self, button: ButtonId) {
        let (entree, ans) = apply_button(&self.entree, self.dernier_resultat.as_deref(), button);
        debug!(touche = %button, avant = %self.entree, apres = %entree, "touche");

        // "Error" n’est jamais le texte d’un résultat : = a réussi sinon
        if button.action() == Action::Evaluer && entree != ERREUR_AFFICHEE {
            let expression = std::mem::take(&mut self.entree);
            self.historique.push_front((expression, entree.clone()));
            self.historique.truncate(HISTORIQUE_MAX);
        }

        self.entree = entree;
        self.dernier_resultat = ans;
        self.focus_entree = true;
    }

    /// C (aussi ESC au clavier).
    pub fn clear_entree(&mut self) {
        self.appuyer(ButtonId::Clear);
    }

    /// = (aussi Enter au clavier).
    pub fn evaluer(&mut self) {
        self.appuyer(ButtonId::Egal);
    }

    /// Clic sur une ligne de l’historique : son expression remplace l’entrée.
    /// Ans n’est pas touché. Index hors bornes : rien.
    pub fn rappeler_historique(&mut self, index: usize) {
        if let Some((expression, _)) = self.historique.get(index) {
            self.entree = expression.clone();
            self.focus_entree = true;
        }
    }

    pub fn effacer_historique(&mut self) {
        debug!(entrees = self.historique.len(), "historique effacé");
        self.historique.clear();
    }
}
