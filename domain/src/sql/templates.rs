//! SQL templates, one per intent.
//!
//! Values are interpolated straight into the SQL text without escaping or
//! parameter binding. The dialect is SQLite (`strftime`, `date`, `JULIANDAY`).

use crate::slot::Quarter;

/// Successful payments summed per tenant, largest first.
pub fn top_tenants_by_rent(limit: u64) -> String {
    format!(
        "SELECT py.tenant_id, SUM(py.amount) AS total_rent
FROM payments py
WHERE py.status = 'successful'
GROUP BY py.tenant_id
ORDER BY total_rent DESC
LIMIT {limit};"
    )
}

/// Average review rating of apartments and houses.
pub fn average_rating_by_property_type() -> String {
    "SELECT p.property_type, ROUND(AVG(r.rating), 2) AS avg_rating
FROM reviews r
JOIN properties p ON p.property_id = r.property_id
WHERE p.property_type IN ('apartment','house')
GROUP BY p.property_type
ORDER BY p.property_type;"
        .to_string()
}

/// Successful payments in `year` summed per landlord, largest first.
pub fn landlord_revenue_by_year(year: i32) -> String {
    format!(
        "SELECT (u.first_name || ' ' || u.last_name) AS landlord,
       ROUND(SUM(py.amount), 2) AS revenue
FROM payments py
JOIN bookings b   ON b.booking_id = py.booking_id
JOIN properties p ON p.property_id = b.property_id
JOIN users u      ON u.user_id = p.landlord_id
WHERE py.status = 'successful'
  AND strftime('%Y', py.payment_date) = '{year}'
GROUP BY landlord
ORDER BY revenue DESC;"
    )
}

/// Available two-bedroom properties in `city` priced strictly below `price_ceiling`.
pub fn availability_filter(city: &str, price_ceiling: f64) -> String {
    format!(
        "SELECT p.title, p.city, p.bedrooms, p.rent_price, p.status
FROM properties p
WHERE p.status='available'
  AND p.bedrooms=2
  AND p.city='{city}'
  AND p.rent_price < {price_ceiling}
ORDER BY p.rent_price ASC;"
    )
}

/// Booked days over available property-days for `city` within `quarter`, as a percentage.
///
/// Bookings are deduplicated per booking id (grouped MAX of the dates) and
/// clipped to the quarter window before the day count is summed.
pub fn occupancy_rate_by_quarter(city: &str, quarter: Quarter) -> String {
    let start = quarter.start_date();
    let end = quarter.end_date();
    format!(
        "WITH city_props AS (
  SELECT property_id FROM properties WHERE city = '{city}'
),
quarter_bookings AS (
  SELECT b.property_id,
         MAX(date(b.start_date, 'start of day')) AS s,
         MAX(date(b.end_date, 'start of day'))   AS e
  FROM bookings b
  JOIN city_props cp ON cp.property_id = b.property_id
  WHERE NOT (b.end_date < date('{start}') OR b.start_date > date('{end}'))
    AND b.status IN ('confirmed','completed')
  GROUP BY b.booking_id
),
span AS (
  SELECT COUNT(*) AS prop_count FROM city_props
),
booked_days AS (
  SELECT SUM(
    JULIANDAY(CASE WHEN e > date('{end}') THEN date('{end}') ELSE e END)
    - JULIANDAY(CASE WHEN s < date('{start}') THEN date('{start}') ELSE s END)
    + 1
  ) AS booked
  FROM quarter_bookings
),
denom AS (
  SELECT prop_count * (JULIANDAY('{end}') - JULIANDAY('{start}') + 1) AS total_days
  FROM span
)
SELECT
  '{city}' AS city,
  '{quarter}' AS period,
  ROUND(100.0 * COALESCE(b.booked, 0) / NULLIF(d.total_days, 0), 2) AS occupancy_rate_percent
FROM booked_days b, denom d;"
    )
}
