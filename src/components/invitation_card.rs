//! Invitation Card Component
//!
//! The printed invitation. The honoree names and the venue come from
//! settings, so edits to them show up here.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::store::{use_event_store, EventStateStoreFields};

#[component]
pub fn InvitationCard() -> impl IntoView {
    let store = use_event_store();

    // Secular date line in the browser's en-US rendering
    let secular_date = move || {
        let millis = store.settings().read().event_date.timestamp_millis();
        let date = js_sys::Date::new(&JsValue::from_f64(millis as f64));
        String::from(date.to_locale_date_string("en-US", &JsValue::UNDEFINED))
    };

    view! {
        <div class="invitation-card" dir="rtl">
            <p class="inv-hashem">"בעזהשי״ת"</p>
            <div class="inv-verses">
                <p>"נעלה את ירושלים על ראש שמחתינו"</p>
                <p>"עוד ישמע בערי יהודה ובחוצות ירושלים"</p>
                <p>"קול ששון וקול שמחה קול חתן וקול כלה"</p>
            </div>
            <div class="inv-divider"></div>
            <div class="inv-text">
                <p>"בשבח והודאה להשי״ת על כל הטוב שגמלנו"</p>
                <p>"הננו בזה להזמין את מע״כ קרובינו וידידינו"</p>
                <p>"להשתתף בשמחת כלולת צאצאינו היקרים ה״ה"</p>
            </div>
            <div class="inv-name-block">
                <p class="inv-name-intro">"הבחור החתן המופלג בתוי״ש"</p>
                <p class="inv-name">
                    {move || format!("כמר {} נ״י", store.settings().read().groom_name)}
                </p>
            </div>
            <p class="inv-with">"עב״ג"</p>
            <div class="inv-name-block">
                <p class="inv-name-intro">"הכלה המהוללה"</p>
                <p class="inv-name">
                    {move || format!("מרת {} תחי׳", store.settings().read().bride_name)}
                </p>
            </div>
            <div class="inv-divider"></div>
            <div class="inv-text">
                <p>"שתתקיים אי״ה למזל טוב בשעה טובה ומוצלחת"</p>
                <p class="inv-date">"ביום ד׳ ח״י טבת שנת תשפ״ו לפ״ק הבע״ל"</p>
                <p class="inv-secular">{secular_date}</p>
            </div>
            <div class="inv-times">
                <p>"קבלת פנים בשעה 5:00"</p>
                <p>"החופה בשעה 6:00"</p>
            </div>
            <div class="inv-venue">
                <p class="inv-venue-name">
                    {move || store.settings().read().location.clone()}
                </p>
                <p class="inv-venue-address" dir="ltr">"Williamsburg, Brooklyn NY"</p>
            </div>
            <p class="inv-closing">"המצפים לקבל פניכם בחדוה ושמחה"</p>
        </div>
    }
}
