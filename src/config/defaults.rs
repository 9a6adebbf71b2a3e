use super::models::{Category, NECESSARY_CATEGORY_IDENTIFIER};
use super::text::LocalizedText;
use std::time::Duration;

/// Languages every built-in dictionary covers.
pub const BUILTIN_LANGUAGES: [&str; 5] = ["en", "de", "nl", "es", "fr"];

const SECS_PER_DAY: u64 = 24 * 60 * 60;

fn builtin(en: &str, de: &str, nl: &str, es: &str, fr: &str) -> LocalizedText {
    LocalizedText::from([("en", en), ("de", de), ("nl", nl), ("es", es), ("fr", fr)])
}

pub(crate) fn default_revision() -> i32 {
    1
}

pub(crate) fn default_auto_show() -> bool {
    true
}

pub(crate) fn default_locale() -> String {
    "en".to_string()
}

pub(crate) fn default_policy_url() -> String {
    "#".to_string()
}

pub(crate) fn default_cookie_name() -> String {
    ".AspNet.CookieConsent".to_string()
}

pub(crate) fn default_cookie_is_essential() -> bool {
    true
}

pub(crate) fn default_cookie_max_age() -> Option<Duration> {
    Some(Duration::from_secs(180 * SECS_PER_DAY))
}

pub(crate) fn default_cookie_path() -> String {
    "/".to_string()
}

pub(crate) fn default_cookie_secure() -> bool {
    true
}

pub(crate) fn default_consent_title() -> LocalizedText {
    builtin(
        "We use cookies",
        "Wir verwenden Cookies",
        "We gebruiken cookies",
        "Nosotras usamos cookies",
        "On utilises des cookies",
    )
}

pub(crate) fn default_consent_description() -> LocalizedText {
    builtin(
        "This website uses cookies to improve your experience.",
        "Diese Webseite verwendet Cookies, um Ihre Erfahrung zu verbessern.",
        "Deze website maakt gebruik van cookies om uw ervaring te verbeteren.",
        "Este sitio web utiliza cookies para una mejor experiencia.",
        "Ce site web utilice des cookies pour améliorer votre visite.",
    )
}

pub(crate) fn default_consent_accept_all() -> LocalizedText {
    builtin(
        "Accept all",
        "Alle akzeptieren",
        "Alles accepteren.",
        "Aceptar todas.",
        "Tout accepter.",
    )
}

pub(crate) fn default_consent_acknowledge() -> LocalizedText {
    builtin(
        "I understand!",
        "Alles klar!",
        "Ik begrijp het!",
        "Entiendo!",
        "Je comprends!",
    )
}

pub(crate) fn default_consent_necessary_only() -> LocalizedText {
    builtin("Decline", "Ablehnen", "Afwijzen", "Rechazar", "Refuser")
}

pub(crate) fn default_open_preferences() -> LocalizedText {
    builtin(
        "Manage preferences",
        "Präferenzen ändern",
        "Voorkeuren wijzigen",
        "Administrar preferencias",
        "Gérer les préférences",
    )
}

pub(crate) fn default_settings_title() -> LocalizedText {
    builtin(
        "Your cookie preferences",
        "Ihre Cookie Präferenzen",
        "Uw cookie instellingen",
        "Sus preferencias de cookies",
        "Vos préférences de cookies",
    )
}

pub(crate) fn default_settings_description() -> LocalizedText {
    builtin(
        "We use cookies to ensure basic functionality of the website and to enhance your online experience. For each category, you may choose to opt-in/out whenever you want.",
        "Wir nutzen Cookies für grundlegende Funktionalitäten unserer Webseite und zum Verbessern Ihrer Nutzererfahrung. Für jede Kategorie können Sie individuell Ihre Zustimmung erteilen.",
        "We gebruiken cookies om de basisfunctionaliteit van de website te garanderen en om uw online ervaring te verbeteren. Voor elke categorie kunt u ervoor kiezen om u aan/uit te melden wanneer u maar wilt.",
        "Utilizamos cookies para garantizar la funcionalidad básica del sitio web y mejorar su experiencia en línea. Para cada categoría, puede optar por participar o excluirse cuando lo desee.",
        "Nous utilisons des cookies pour garantir les fonctionnalités de base du site Web et pour améliorer votre expérience en ligne. Pour chaque catégorie, vous pouvez choisir de vous inscrire ou de vous désinscrire quand vous le souhaitez.",
    )
}

pub(crate) fn default_settings_continue_with_selected_preferences() -> LocalizedText {
    builtin(
        "Save preferences",
        "Präferenzen anwenden",
        "Voorkeuren opslaan",
        "Guardar preferencias",
        "Sauvegarder mes préférences",
    )
}

pub(crate) fn default_settings_used_services() -> LocalizedText {
    builtin(
        "Used services",
        "Verwendete Dienste",
        "Gebruikte diensten",
        "Servicios utilizados",
        "Services utilisés",
    )
}

pub(crate) fn default_show_policy() -> LocalizedText {
    builtin(
        "Show cookie policy",
        "Cookie-Richtline anzeigen",
        "Toon cookie beleid",
        "Abrir la poliza de cookies",
        "Afficher la politique des cookies",
    )
}

pub(crate) fn default_check_text() -> LocalizedText {
    builtin(
        "This content uses cookies that are disallowed by your settings. To show it, we need to adjust your cookie settings for our website. We require your consent for:",
        "Dieser Inhalt nutzt Cookies, die aktuell nicht erlaubt sind. Um ihn anzuzeigen, müssen Sie Ihre Cookie-Präferenzen auf unserer Webseite aktualisieren. Wir benötigen Ihre Zustimmung für:",
        "Deze inhoud maakt gebruik van cookies die niet zijn toegestaan door uw instellingen. Om het te tonen, moeten we uw cookie-instellingen voor onze website aanpassen. Wij hebben uw toestemming nodig voor:",
        "Este contenido utiliza cookies que no están permitidas por su configuración. Para mostrarlo, necesitamos ajustar la configuración de cookies para nuestro sitio web. Requerimos su consentimiento para:",
        "Ce contenu utilise des cookies qui sont interdits par vos paramètres. Pour l'afficher, nous devons ajuster vos paramètres de cookies pour notre site Web. Nous avons besoin de votre consentement pour :",
    )
}

pub(crate) fn default_check_accept_text() -> LocalizedText {
    builtin("Accept", "Akzeptieren", "Accepteren", "Aceptar", "Accepter")
}

pub(crate) fn default_categories() -> Vec<Category> {
    vec![necessary_category()]
}

/// The built-in "necessary" category, required and shipped with copy for
/// every built-in language.
pub fn necessary_category() -> Category {
    Category {
        title: builtin(
            "Strictly necessary cookies",
            "Umbedingt notwendige Cookies",
            "Strict noodzakelijke cookies",
            "Cookies estrictamente necesarias",
            "Cookies strictement nécessaires",
        ),
        description: builtin(
            "These cookies are essential for the proper functioning of this website. They do not contain personal data and are not used to track you.",
            "Diese Cookies sind umbedingt notwendig für die Nutzung dieser Webseite. Sie enthalten keine personenbezogenen Daten und werden nicht für Tracking verwendet.",
            "Deze cookies zijn essentieel voor het goed functioneren van deze website. Ze bevatten geen persoonlijke gegevens en worden niet gebruikt om u te volgen.",
            "Estas cookies son esenciales para el correcto funcionamiento de este sitio web. No contienen datos personales y no se utilizan para rastrearlo.",
            "Ces cookies sont indispensables au bon fonctionnement de ce site. Ils ne contiennent pas de données personnelles et ne sont pas utilisés pour vous suivre.",
        ),
        is_required: true,
        ..Category::new(NECESSARY_CATEGORY_IDENTIFIER)
    }
}
