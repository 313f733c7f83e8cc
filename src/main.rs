fn main() {
    admin_ui::boot();
}
