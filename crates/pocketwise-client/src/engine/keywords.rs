use crate::model::{ExpenseCategory, IncomeCategory};

// Keyword tables for auto-categorization. Keywords are stored lowercase;
// table order must match the category enum declaration order because the
// scorer breaks ties by first-encountered category.

pub(crate) const EXPENSE_KEYWORDS: [(ExpenseCategory, &[&str]); 6] = [
    (
        ExpenseCategory::Makanan,
        &[
            "makan", "food", "resto", "restaurant", "cafe", "kopi", "coffee", "nasi", "ayam",
            "burger", "pizza", "bakso", "mie", "soto", "warteg", "kantin", "catering", "delivery",
            "gofood", "grabfood", "breakfast", "lunch", "dinner", "sarapan", "makan siang",
            "makan malam", "snack", "cemilan", "jajan", "starbucks", "mcd", "kfc", "pizza hut",
            "indomaret", "alfamart", "supermarket", "pasar", "beli sayur", "groceries",
            "belanja bulanan",
        ],
    ),
    (
        ExpenseCategory::Transport,
        &[
            "transport", "transportasi", "ojek", "gojek", "grab", "uber", "taxi", "bus", "angkot",
            "kereta", "commuter", "mrt", "lrt", "bensin", "pertamax", "solar", "bbm", "isi bensin",
            "spbu", "parkir", "tol", "e-toll", "e toll", "parking", "service motor",
            "service mobil", "cuci motor", "cuci mobil", "bluebird", "travel", "rental",
        ],
    ),
    (
        ExpenseCategory::Kuliah,
        &[
            "kuliah", "kampus", "university", "college", "akademik", "spp", "ukt", "tuition",
            "semester", "bayar kuliah", "buku", "book", "textbook", "fotocopy", "print", "jilid",
            "tugas", "assignment", "project", "penelitian", "skripsi", "thesis", "seminar",
            "workshop", "kursus", "course", "pelatihan", "training", "sertifikasi",
            "certification", "gramedia", "toko buku", "atk", "alat tulis", "pulpen", "pensil",
        ],
    ),
    (
        ExpenseCategory::Hiburan,
        &[
            "hiburan", "entertainment", "nonton", "film", "movie", "cinema", "bioskop", "cgv",
            "xxi", "cinepolis", "netflix", "spotify", "youtube", "disney", "prime video",
            "subscription", "langganan", "streaming", "game", "gaming", "steam", "playstation",
            "xbox", "nintendo", "concert", "konser", "festival", "event", "tiket", "karaoke",
            "ktv", "billiard", "bowling", "arcade", "gym", "fitness", "olahraga", "sport",
            "futsal", "badminton", "traveling", "vacation", "liburan", "hotel", "hostel", "airbnb",
        ],
    ),
    (
        ExpenseCategory::Kebutuhan,
        &[
            "kebutuhan", "needs", "keperluan", "sabun", "shampoo", "pasta gigi", "sikat gigi",
            "deodorant", "skincare", "facial", "moisturizer", "sunscreen", "toner", "makeup",
            "kosmetik", "lipstik", "foundation", "bedak", "baju", "celana", "kaos", "kemeja",
            "dress", "sepatu", "sandal", "fashion", "clothing", "uniqlo", "h&m", "zara",
            "online shop", "tokopedia", "shopee", "lazada", "bukalapak", "blibli", "laundry",
            "cuci baju", "setrika", "potong rambut", "barber", "salon", "haircut", "obat",
            "medicine", "vitamin", "apotek", "pharmacy", "dokter", "doctor", "listrik", "pln",
            "token listrik", "air", "pdam", "wifi", "internet", "pulsa", "paket data", "top up",
        ],
    ),
    (
        ExpenseCategory::Lainnya,
        &[
            "lain", "other", "misc", "miscellaneous", "transfer", "kiriman", "hadiah", "gift",
            "kado", "donasi", "donation", "zakat", "infaq", "asuransi", "insurance", "investasi",
            "investment", "tabungan", "saving",
        ],
    ),
];

pub(crate) const INCOME_KEYWORDS: [(IncomeCategory, &[&str]); 4] = [
    (
        IncomeCategory::UangSaku,
        &[
            "uang saku", "jajan", "dari ortu", "dari orang tua", "bulanan", "mingguan",
            "transfer ortu", "kiriman",
        ],
    ),
    (
        IncomeCategory::KerjaSampingan,
        &[
            "freelance", "project", "gaji", "salary", "payment", "bayaran", "honor", "fee",
            "kerja", "part time", "parttime", "sampingan", "upwork", "fiverr", "design", "coding",
            "ngoding", "programming", "tutor", "les", "mengajar", "commission", "komisi", "bonus",
        ],
    ),
    (
        IncomeCategory::Beasiswa,
        &[
            "beasiswa", "scholarship", "grant", "bantuan", "stipend", "penelitian", "research",
        ],
    ),
    (
        IncomeCategory::Lainnya,
        &[
            "hadiah", "gift", "menang", "lottery", "undian", "reward", "cashback", "refund",
            "reimbursement",
        ],
    ),
];
