pub mod catalog {
    pub mod catalogerror;
    pub mod catalogprovider;
    pub mod holidayrecord;
    pub mod jsoncatalog;
}

pub mod holiday {
    pub mod holidaydefinition;
    pub mod holidayerror;
    pub mod holidayservice;
    pub mod observeddate;
}

pub mod time {
    pub mod easter;
}
