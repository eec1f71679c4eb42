use maud::{Markup, html};

use folio_core::Site;
use folio_core::meta::PageMeta;

use crate::views::layout::{Section, layout};

/// Passphrase prompt. The input is always rendered empty; `error` is the
/// static message from a failed attempt.
pub fn render(site: &Site, error: Option<&str>) -> Markup {
    let info = &site.config.site;
    let meta = PageMeta::page(info, "/calendar", "Calendar", "Private calendar").private();

    let content = html! {
        section.gate {
            h1 { "Calendar" }
            @if site.gate.is_configured() {
                p { "This calendar is shared with friends and family. Enter the passphrase to continue." }
                form method="post" action="/calendar/unlock" {
                    label for="passphrase" { "Passphrase" }
                    input #passphrase type="password" name="passphrase" value="" autocomplete="off" autofocus;
                    button type="submit" { "Open calendar" }
                }
                @if let Some(message) = error {
                    p.gate-error role="alert" { (message) }
                }
            } @else {
                p { "The calendar isn't available right now." }
            }
        }
    };

    layout(info, &meta, Section::Calendar, content)
}
