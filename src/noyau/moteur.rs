// src/noyau/moteur.rs
//
// Moteur de la calculatrice : la machine à états qui interprète la suite
// de touches (chiffres, opérateurs, point, égal, C) en calcul courant.
//
// Contrats (Loi de Clément, version moteur) :
// - Aucune dépendance d'affichage : pur état + transitions, testable sans vue.
// - `affichage` est toujours un littéral décimal valide (au plus un point,
//   jamais vide).
// - `operation == None` implique `accumulateur == None` (pas d'opérateur
//   orphelin).
// - Division par zéro : erreur typée, état du moteur strictement inchangé.

use num_rational::BigRational;
use num_traits::Zero;

use super::format::formater_resultat;
use super::lecture::lire_decimal;
use super::touches::{Operateur, Touche};

use std::fmt;

/// Seule erreur possible du moteur : division par zéro dans `resoudre`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErreurCalcul {
    DivisionParZero,
}

impl fmt::Display for ErreurCalcul {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErreurCalcul::DivisionParZero => write!(f, "division par zéro"),
        }
    }
}

impl std::error::Error for ErreurCalcul {}

/// Signal à destination de l'adaptateur d'entrée : un résultat vient-il
/// d'être produit ? (la vue peut alors jouer le « pulse » visuel)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    Aucun,
    ResultatProduit,
}

/// État de la calculatrice.
///
/// Chaîne gauche-droite sans précédence : `2 + 3 × 4` vaut `(2+3)×4 = 20`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Moteur {
    /// Valeur affichée, toujours un littéral décimal valide.
    affichage: String,
    /// Premier opérande de l'opération en attente (exact), sinon None.
    accumulateur: Option<BigRational>,
    /// Opérateur en attente de son second opérande, sinon None.
    operation: Option<Operateur>,
    /// Vrai juste après un opérateur ou égal : le prochain chiffre
    /// remplace l'affichage au lieu de s'y concaténer.
    attente_nouvelle_saisie: bool,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            accumulateur: None,
            operation: None,
            attente_nouvelle_saisie: false,
        }
    }
}

impl Moteur {
    /* ------------------------ Lectures ------------------------ */

    /// La chaîne à rendre telle quelle par l'adaptateur.
    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn operation(&self) -> Option<Operateur> {
        self.operation
    }

    pub fn accumulateur(&self) -> Option<&BigRational> {
        self.accumulateur.as_ref()
    }

    pub fn attente_nouvelle_saisie(&self) -> bool {
        self.attente_nouvelle_saisie
    }

    /// Opérande courant : l'affichage relu en rationnel exact.
    /// L'affichage est une production du moteur, donc toujours lisible.
    fn operande_courant(&self) -> BigRational {
        lire_decimal(&self.affichage).unwrap_or_else(BigRational::zero)
    }

    /* ------------------------ Les cinq opérations ------------------------ */

    /// Chiffre ou point décimal. Totale : ne peut pas échouer.
    ///
    /// - point : "0." après un opérateur/égal ; ajout si pas encore de point ;
    ///   sinon rien (invariant : au plus un point)
    /// - chiffre : remplace après un opérateur/égal ; remplace un "0" seul
    ///   (pas de "05") ; sinon concatène
    ///
    /// Tout autre caractère est ignoré (l'adaptateur n'en envoie pas).
    pub fn entrer_chiffre(&mut self, c: char) {
        if c == '.' {
            if self.attente_nouvelle_saisie {
                self.affichage = "0.".to_string();
                self.attente_nouvelle_saisie = false;
            } else if !self.affichage.contains('.') {
                self.affichage.push('.');
            }
            return;
        }

        if !c.is_ascii_digit() {
            return;
        }

        if self.attente_nouvelle_saisie {
            self.affichage = c.to_string();
            self.attente_nouvelle_saisie = false;
        } else if self.affichage == "0" {
            self.affichage = c.to_string();
        } else {
            self.affichage.push(c);
        }
    }

    /// Opérateur binaire.
    ///
    /// Premier opérateur d'une chaîne : engage l'opérande courant dans
    /// l'accumulateur. Opérateur suivant : résout d'abord l'opération en
    /// attente (chaîne gauche-droite) et signale ResultatProduit.
    ///
    /// En cas de division par zéro pendant la résolution, l'état est laissé
    /// strictement inchangé (pas de nouvel opérateur engagé non plus).
    pub fn entrer_operateur(&mut self, op: Operateur) -> Result<Signal, ErreurCalcul> {
        let courant = self.operande_courant();
        let mut signal = Signal::Aucun;

        match (self.accumulateur.clone(), self.operation) {
            (None, _) => {
                self.accumulateur = Some(courant);
            }
            (Some(acc), Some(en_attente)) => {
                let resultat = resoudre(&acc, &courant, en_attente)?;
                self.affichage = formater_resultat(&resultat);
                self.accumulateur = Some(resultat);
                signal = Signal::ResultatProduit;
            }
            // inatteignable (operation == None => accumulateur == None),
            // garde neutre au cas où
            (Some(_), None) => {}
        }

        self.operation = Some(op);
        self.attente_nouvelle_saisie = true;
        Ok(signal)
    }

    /// Égal : résout l'opération en attente et clôt la chaîne.
    ///
    /// Sans effet si rien n'est en attente, ou si le second opérande n'a pas
    /// encore été saisi (égal juste après un opérateur).
    pub fn entrer_egal(&mut self) -> Result<Signal, ErreurCalcul> {
        let (Some(acc), Some(op)) = (self.accumulateur.clone(), self.operation) else {
            return Ok(Signal::Aucun);
        };
        if self.attente_nouvelle_saisie {
            return Ok(Signal::Aucun);
        }

        let resultat = resoudre(&acc, &self.operande_courant(), op)?;
        self.affichage = formater_resultat(&resultat);
        self.accumulateur = None;
        self.operation = None;
        self.attente_nouvelle_saisie = true;
        Ok(Signal::ResultatProduit)
    }

    /// C : retour exact à l'état initial.
    pub fn effacer(&mut self) {
        *self = Self::default();
    }

    /* ------------------------ Frontière touches ------------------------ */

    /// Dispatch d'une touche vers l'opération correspondante.
    /// C'est l'entrée unique utilisée par l'adaptateur (boutons + clavier).
    pub fn appuyer(&mut self, touche: Touche) -> Result<Signal, ErreurCalcul> {
        match touche {
            Touche::Chiffre(c) => {
                self.entrer_chiffre(c);
                Ok(Signal::Aucun)
            }
            Touche::Point => {
                self.entrer_chiffre('.');
                Ok(Signal::Aucun)
            }
            Touche::Operation(op) => self.entrer_operateur(op),
            Touche::Egal => self.entrer_egal(),
            Touche::Effacer => {
                self.effacer();
                Ok(Signal::Aucun)
            }
        }
    }
}

/// Résout une opération binaire sur deux opérandes exacts.
pub fn resoudre(
    a: &BigRational,
    b: &BigRational,
    op: Operateur,
) -> Result<BigRational, ErreurCalcul> {
    op.appliquer(a, b)
}
