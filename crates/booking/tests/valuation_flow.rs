//! Full pipeline run the way the CRUD layer drives it: create, then update,
//! asserting the observable booking fields after each valuation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use innkeep_booking::{
    Booking, CommissionSource, Payment, RoomLineItem, ValuationRequest, valuate,
};
use innkeep_core::{BookingId, BrokerId, CurrencyId, PaymentId, SupplierId};
use innkeep_currency::{Currency, RateTable};

fn rates() -> RateTable {
    [
        Currency {
            id: CurrencyId::new(1),
            code: "EUR".to_string(),
            symbol: Some("€".to_string()),
            rate_to_base: Some(Decimal::ONE),
        },
        Currency {
            id: CurrencyId::new(2),
            code: "USD".to_string(),
            symbol: Some("$".to_string()),
            rate_to_base: Some(dec!(1.5)),
        },
    ]
    .into_iter()
    .collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn create_then_update_flow() {
    innkeep_observability::init();

    let rates = rates();
    let mut booking = Booking::new(BookingId::new(1));
    booking.supplier_id = Some(SupplierId::new(7));
    booking.broker_id = Some(BrokerId::new(3));

    // Create: three nights, two rooms of 100/night in base currency.
    let create = ValuationRequest {
        check_in: Some(date(2024, 1, 1)),
        check_out: Some(date(2024, 1, 4)),
        rooms: Some(vec![RoomLineItem {
            room_count: Some(2),
            price_per_night: Some(dec!(100)),
            currency_id: Some(CurrencyId::new(1)),
            ..RoomLineItem::default()
        }]),
        ..ValuationRequest::default()
    };
    let totals = valuate(&mut booking, create, &rates);

    assert_eq!(booking.total_price, dec!(600.00));
    assert_eq!(totals.total_price_base, dec!(600.00));
    assert_eq!(totals.total_paid_base, dec!(0.00));
    assert_eq!(totals.remaining_base, dec!(600.00));
    assert_eq!(totals.base_currency_code, "EUR");

    let sources: Vec<_> = booking.commissions.iter().map(|c| c.source).collect();
    assert_eq!(sources, vec![CommissionSource::Supplier, CommissionSource::Broker]);
    assert_eq!(booking.commissions[0].amount, dec!(60.00));

    // A payment lands: 100 USD at a recorded historical rate of 2.0,
    // overriding the live 1.5.
    booking.payments.push(Payment {
        id: PaymentId::new(1),
        amount: dec!(100),
        currency_id: Some(CurrencyId::new(2)),
        rate_used: Some(dec!(2.0)),
    });

    // Update: one room dropped, supplier percent overridden.
    let update = ValuationRequest {
        check_in: Some(date(2024, 1, 1)),
        check_out: Some(date(2024, 1, 4)),
        rooms: Some(vec![RoomLineItem {
            room_count: Some(1),
            price_per_night: Some(dec!(100)),
            currency_id: Some(CurrencyId::new(1)),
            ..RoomLineItem::default()
        }]),
        supplier_commission_percent: Some(dec!(15)),
        ..ValuationRequest::default()
    };
    let totals = valuate(&mut booking, update, &rates);

    assert_eq!(booking.total_price, dec!(300.00));
    assert_eq!(totals.total_paid_base, dec!(200.00));
    assert_eq!(totals.remaining_base, dec!(100.00));

    // Still exactly one commission per auto-generated source.
    let sources: Vec<_> = booking.commissions.iter().map(|c| c.source).collect();
    assert_eq!(sources, vec![CommissionSource::Supplier, CommissionSource::Broker]);
    assert_eq!(booking.commissions[0].percent, dec!(15));
    assert_eq!(booking.commissions[0].amount, dec!(45.00));
    assert_eq!(booking.commissions[1].amount, dec!(30.00));
}

#[test]
fn request_payload_deserializes_with_camel_case_fields() {
    let request: ValuationRequest = serde_json::from_str(
        r#"{
            "checkIn": "2024-01-01",
            "checkOut": "2024-01-04",
            "rooms": [{"roomCount": 2, "pricePerNight": "100", "currencyId": 1}],
            "supplierCommissionPercent": "12.5"
        }"#,
    )
    .unwrap();

    assert_eq!(request.check_in, Some(date(2024, 1, 1)));
    assert_eq!(request.supplier_commission_percent, Some(dec!(12.5)));
    let rooms = request.rooms.unwrap();
    assert_eq!(rooms[0].room_count, Some(2));
    assert_eq!(rooms[0].currency_id, Some(CurrencyId::new(1)));
}
