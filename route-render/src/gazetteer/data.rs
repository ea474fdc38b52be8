//! Built-in place table, v3 (2025-11 survey of upstream stop names).
//!
//! Covers the Sakha Republic settlements the route builder produces plus
//! the major connecting cities. Each place is listed under its Russian
//! name and a transliterated English key, since producers send both.

/// `(key, latitude, longitude)`. Keys are matched case-insensitively.
pub(super) const PLACES: &[(&str, f64, f64)] = &[
    ("Якутск", 62.0355, 129.6755),
    ("Yakutsk", 62.0355, 129.6755),
    ("Нижний Бестях", 61.9611, 129.8956),
    ("Nizhny Bestyakh", 61.9611, 129.8956),
    ("Покровск", 61.4844, 129.1481),
    ("Pokrovsk", 61.4844, 129.1481),
    ("Мирный", 62.5353, 113.9611),
    ("Mirny", 62.5353, 113.9611),
    ("Удачный", 66.4072, 112.3061),
    ("Udachny", 66.4072, 112.3061),
    ("Айхал", 65.9333, 111.5000),
    ("Aikhal", 65.9333, 111.5000),
    ("Ленск", 60.7276, 114.9319),
    ("Lensk", 60.7276, 114.9319),
    ("Олёкминск", 60.3758, 120.4061),
    ("Олекминск", 60.3758, 120.4061),
    ("Olyokminsk", 60.3758, 120.4061),
    ("Алдан", 58.6103, 125.3894),
    ("Aldan", 58.6103, 125.3894),
    ("Томмот", 58.9714, 126.2867),
    ("Tommot", 58.9714, 126.2867),
    ("Нерюнгри", 56.6598, 124.7203),
    ("Neryungri", 56.6598, 124.7203),
    ("Вилюйск", 63.7553, 121.6247),
    ("Vilyuysk", 63.7553, 121.6247),
    ("Верхневилюйск", 63.4458, 120.3056),
    ("Verkhnevilyuysk", 63.4458, 120.3056),
    ("Нюрба", 63.2833, 118.3333),
    ("Nyurba", 63.2833, 118.3333),
    ("Сунтар", 62.1500, 117.6333),
    ("Suntar", 62.1500, 117.6333),
    ("Сангар", 63.9242, 127.4739),
    ("Sangar", 63.9242, 127.4739),
    ("Жиганск", 66.7697, 123.3711),
    ("Zhigansk", 66.7697, 123.3711),
    ("Тикси", 71.6366, 128.8685),
    ("Tiksi", 71.6366, 128.8685),
    ("Батагай", 67.6558, 134.6350),
    ("Batagay", 67.6558, 134.6350),
    ("Верхоянск", 67.5447, 133.3850),
    ("Verkhoyansk", 67.5447, 133.3850),
    ("Усть-Нера", 64.5667, 143.2000),
    ("Ust-Nera", 64.5667, 143.2000),
    ("Хандыга", 62.6560, 135.5600),
    ("Khandyga", 62.6560, 135.5600),
    ("Среднеколымск", 67.4581, 153.7069),
    ("Srednekolymsk", 67.4581, 153.7069),
    ("Черский", 68.7500, 161.3300),
    ("Chersky", 68.7500, 161.3300),
    ("Белая Гора", 68.5333, 146.1833),
    ("Belaya Gora", 68.5333, 146.1833),
    ("Зырянка", 65.7500, 150.8500),
    ("Zyryanka", 65.7500, 150.8500),
    ("Саскылах", 71.9167, 114.0833),
    ("Saskylakh", 71.9167, 114.0833),
    ("Оленёк", 68.5000, 112.4333),
    ("Оленек", 68.5000, 112.4333),
    ("Olenyok", 68.5000, 112.4333),
    ("Москва", 55.7558, 37.6173),
    ("Moscow", 55.7558, 37.6173),
    ("Санкт-Петербург", 59.9343, 30.3351),
    ("Saint Petersburg", 59.9343, 30.3351),
    ("Новосибирск", 55.0084, 82.9357),
    ("Novosibirsk", 55.0084, 82.9357),
    ("Красноярск", 56.0153, 92.8932),
    ("Krasnoyarsk", 56.0153, 92.8932),
    ("Иркутск", 52.2870, 104.3050),
    ("Irkutsk", 52.2870, 104.3050),
    ("Хабаровск", 48.4802, 135.0719),
    ("Khabarovsk", 48.4802, 135.0719),
    ("Владивосток", 43.1155, 131.8855),
    ("Vladivostok", 43.1155, 131.8855),
    ("Магадан", 59.5681, 150.8085),
    ("Magadan", 59.5681, 150.8085),
    ("Благовещенск", 50.2907, 127.5272),
    ("Blagoveshchensk", 50.2907, 127.5272),
    ("Екатеринбург", 56.8389, 60.6057),
    ("Yekaterinburg", 56.8389, 60.6057),
];
